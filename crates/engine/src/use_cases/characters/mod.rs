//! Character use cases.

mod get_character;
mod get_characters;
mod move_character;

pub use get_character::GetCharacter;
pub use get_characters::GetCharacters;
pub use move_character::MoveCharacter;

use std::sync::Arc;

/// Container for character use cases.
pub struct CharacterUseCases {
    pub get_characters: Arc<GetCharacters>,
    pub get_character: Arc<GetCharacter>,
    pub move_character: Arc<MoveCharacter>,
}

impl CharacterUseCases {
    pub fn new(
        get_characters: Arc<GetCharacters>,
        get_character: Arc<GetCharacter>,
        move_character: Arc<MoveCharacter>,
    ) -> Self {
        Self {
            get_characters,
            get_character,
            move_character,
        }
    }
}
