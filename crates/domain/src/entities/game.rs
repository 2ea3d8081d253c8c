//! Game aggregate - One isolated maze session
//!
//! A game owns its maze layout (locations by id) and its characters. Characters
//! keep the order they joined in so listings are stable while the game is
//! unchanged.

use std::collections::HashMap;

use crate::{Character, CharacterClass, CharacterId, DomainError, GameId, Location, LocationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    locations: HashMap<LocationId, Location>,
    characters: Vec<Character>,
    /// Position of each character in `characters`.
    roster: HashMap<CharacterId, usize>,
}

impl Game {
    pub fn new(id: impl Into<GameId>) -> Self {
        Self {
            id: id.into(),
            locations: HashMap::new(),
            characters: Vec::new(),
            roster: HashMap::new(),
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    // =========================================================================
    // Map
    // =========================================================================

    pub fn add_location(&mut self, location: Location) -> Result<(), DomainError> {
        if self.locations.contains_key(&location.id) {
            return Err(DomainError::DuplicateLocation(location.id));
        }
        self.locations.insert(location.id, location);
        Ok(())
    }

    /// Verify every movement lands on a location of this game.
    pub fn check_map(&self) -> Result<(), DomainError> {
        for location in self.locations.values() {
            for movement in &location.movements {
                if !self.locations.contains_key(&movement.to_location) {
                    return Err(DomainError::unknown_location(&self.id, movement.to_location));
                }
            }
        }
        Ok(())
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn has_location(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.values()
    }

    // =========================================================================
    // Characters
    // =========================================================================

    /// Add a character standing on `location`.
    pub fn add_character(
        &mut self,
        id: CharacterId,
        character_class: CharacterClass,
        location: LocationId,
    ) -> Result<&Character, DomainError> {
        if self.roster.contains_key(&id) {
            return Err(DomainError::DuplicateCharacter(id));
        }
        let start = self
            .locations
            .get(&location)
            .ok_or_else(|| DomainError::unknown_location(&self.id, location))?;

        let index = self.characters.len();
        self.characters.push(Character::at(id, character_class, start));
        self.roster.insert(id, index);
        Ok(&self.characters[index])
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.roster.get(&id).map(|&index| &self.characters[index])
    }

    /// All characters in the order they joined.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Put a character on `destination`.
    ///
    /// This does not check whether the move is allowed; it only keeps the
    /// character pointing at a location that exists.
    pub fn relocate_character(
        &mut self,
        character_id: CharacterId,
        destination: LocationId,
    ) -> Result<&Character, DomainError> {
        let location = self
            .locations
            .get(&destination)
            .ok_or_else(|| DomainError::unknown_location(&self.id, destination))?;
        let index = *self
            .roster
            .get(&character_id)
            .ok_or_else(|| DomainError::unknown_character(&self.id, character_id))?;

        let character = &mut self.characters[index];
        character.relocate(location);
        Ok(character)
    }
}
