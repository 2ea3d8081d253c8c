//! Error types for the domain layer.
//!
//! Two kinds live here:
//! - [`DomainError`] rejects a game layout that would break the model's
//!   invariants while it is being built.
//! - The per-operation taxonomies ([`ReadGameError`], [`ReadCharacterError`],
//!   [`MoveCharacterError`]) are the closed sets of reasons an operation can
//!   fail. They carry no "unknown" variant; infrastructure failures travel
//!   separately.

use thiserror::Error;

use crate::{CharacterId, GameId, LocationId};

/// Errors raised while constructing a game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Location {0} is defined more than once")]
    DuplicateLocation(LocationId),

    #[error("Character {0} is defined more than once")]
    DuplicateCharacter(CharacterId),

    /// A character or movement refers to a location the game does not have.
    #[error("Location {location} does not exist in game {game_id}")]
    UnknownLocation { game_id: GameId, location: LocationId },

    #[error("Character {character_id} does not exist in game {game_id}")]
    UnknownCharacter {
        game_id: GameId,
        character_id: CharacterId,
    },
}

impl DomainError {
    pub fn unknown_location(game_id: &GameId, location: LocationId) -> Self {
        Self::UnknownLocation {
            game_id: game_id.clone(),
            location,
        }
    }

    pub fn unknown_character(game_id: &GameId, character_id: CharacterId) -> Self {
        Self::UnknownCharacter {
            game_id: game_id.clone(),
            character_id,
        }
    }
}

/// Why reading a whole game failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadGameError {
    #[error("Game not found")]
    NotFound,
}

/// Why reading a single character failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadCharacterError {
    #[error("Game not found")]
    GameNotFound,
    #[error("Character not found")]
    CharacterNotFound,
}

/// Why moving a character failed.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveCharacterError {
    #[error("Game not found")]
    GameNotFound,
    #[error("Character not found")]
    CharacterNotFound,
    #[error("Location not found")]
    LocationNotFound,
    #[error("Not an available movement")]
    NotAnAvailableMovement,
}

impl From<ReadGameError> for ReadCharacterError {
    fn from(error: ReadGameError) -> Self {
        match error {
            ReadGameError::NotFound => Self::GameNotFound,
        }
    }
}

impl From<ReadGameError> for MoveCharacterError {
    fn from(error: ReadGameError) -> Self {
        match error {
            ReadGameError::NotFound => Self::GameNotFound,
        }
    }
}

impl From<ReadCharacterError> for MoveCharacterError {
    fn from(error: ReadCharacterError) -> Self {
        match error {
            ReadCharacterError::GameNotFound => Self::GameNotFound,
            ReadCharacterError::CharacterNotFound => Self::CharacterNotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomies_have_stable_explanations() {
        assert_eq!(ReadGameError::NotFound.to_string(), "Game not found");
        assert_eq!(
            ReadCharacterError::CharacterNotFound.to_string(),
            "Character not found"
        );
        assert_eq!(
            MoveCharacterError::LocationNotFound.to_string(),
            "Location not found"
        );
        assert_eq!(
            MoveCharacterError::NotAnAvailableMovement.to_string(),
            "Not an available movement"
        );
    }

    #[test]
    fn widening_keeps_the_original_tag() {
        assert_eq!(
            ReadCharacterError::from(ReadGameError::NotFound),
            ReadCharacterError::GameNotFound
        );
        assert_eq!(
            MoveCharacterError::from(ReadCharacterError::CharacterNotFound),
            MoveCharacterError::CharacterNotFound
        );
        assert_eq!(
            MoveCharacterError::from(ReadGameError::NotFound),
            MoveCharacterError::GameNotFound
        );
    }

    #[test]
    fn construction_errors_name_the_game() {
        let err = DomainError::unknown_location(&GameId::new("g1"), LocationId::new(9));
        assert_eq!(err.to_string(), "Location 9 does not exist in game g1");
    }
}
