//! Maze domain.
//!
//! Characters, the maze they move through, and the rules that decide whether
//! a single move is legal. Everything here is synchronous and free of I/O.

pub mod entities;
pub mod error;
pub mod ids;
pub mod movement;
pub mod outcome;

pub use entities::{
    Character, CharacterClass, CharacterDefinition, Game, GameDefinition, Location, Movement,
};
pub use error::{DomainError, MoveCharacterError, ReadCharacterError, ReadGameError};
pub use ids::{CharacterId, GameId, LocationId};
pub use outcome::Outcome;
