//! Character entity - A player-controlled piece inside one game

use serde::{Deserialize, Serialize};

use crate::{CharacterId, Location, LocationId, Movement};

/// The role a character was created with. Never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Wizard,
    Rogue,
}

/// A character and the movements it can take from where it stands.
///
/// `available_movements` is derived from the current location and the
/// character's class. It is recomputed on every [`Character::relocate`], which
/// is the only way the character changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: CharacterId,
    location: LocationId,
    character_class: CharacterClass,
    available_movements: Vec<Movement>,
}

impl Character {
    /// Place a new character at `location`.
    pub fn at(id: CharacterId, character_class: CharacterClass, location: &Location) -> Self {
        Self {
            id,
            location: location.id,
            character_class,
            available_movements: location.movements_for(character_class).copied().collect(),
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    pub fn character_class(&self) -> CharacterClass {
        self.character_class
    }

    pub fn available_movements(&self) -> &[Movement] {
        &self.available_movements
    }

    /// Move to `location` and re-derive the available movements from it.
    pub fn relocate(&mut self, location: &Location) {
        self.location = location.id;
        self.available_movements = location
            .movements_for(self.character_class)
            .copied()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_movements_follow_class_and_location() {
        let start = Location::new(LocationId::new(1))
            .with_movement(Movement::to(LocationId::new(2)))
            .with_movement(Movement::to(LocationId::new(3)).requiring(CharacterClass::Wizard));
        let hall = Location::new(LocationId::new(2))
            .with_movement(Movement::to(LocationId::new(1)));

        let mut character = Character::at(CharacterId::new(7), CharacterClass::Warrior, &start);
        assert_eq!(character.location(), LocationId::new(1));
        assert_eq!(
            character.available_movements(),
            &[Movement::to(LocationId::new(2))]
        );

        character.relocate(&hall);
        assert_eq!(character.location(), LocationId::new(2));
        assert_eq!(
            character.available_movements(),
            &[Movement::to(LocationId::new(1))]
        );
        assert_eq!(character.character_class(), CharacterClass::Warrior);
    }

    #[test]
    fn serializes_to_transport_shape() {
        let start = Location::new(LocationId::new(1))
            .with_movement(Movement::to(LocationId::new(2)).requiring(CharacterClass::Rogue));
        let character = Character::at(CharacterId::new(3), CharacterClass::Rogue, &start);

        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "location": 1,
                "characterClass": "Rogue",
                "availableMovements": [{ "toLocation": 2, "requiredClass": "Rogue" }]
            })
        );
    }
}
