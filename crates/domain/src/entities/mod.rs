//! Domain entities.

mod character;
mod definition;
mod game;
mod location;

pub use character::{Character, CharacterClass};
pub use definition::{CharacterDefinition, GameDefinition};
pub use game::Game;
pub use location::{Location, Movement};
