//! Serializable game layout used to seed games.

use serde::{Deserialize, Serialize};

use crate::{CharacterClass, CharacterId, DomainError, Game, GameId, Location, LocationId};

/// A character's starting state in a [`GameDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDefinition {
    pub id: CharacterId,
    pub character_class: CharacterClass,
    pub location: LocationId,
}

/// Full description of a game: its maze and the characters standing in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    pub id: GameId,
    pub locations: Vec<Location>,
    #[serde(default)]
    pub characters: Vec<CharacterDefinition>,
}

impl Game {
    /// Build a game, rejecting layouts that break the model's invariants.
    pub fn from_definition(definition: GameDefinition) -> Result<Self, DomainError> {
        let mut game = Game::new(definition.id);
        for location in definition.locations {
            game.add_location(location)?;
        }
        game.check_map()?;

        for character in definition.characters {
            game.add_character(character.id, character.character_class, character.location)?;
        }
        Ok(game)
    }
}
