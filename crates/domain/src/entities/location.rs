//! Location entity - A node in a game's maze
//!
//! Each location owns the movements that leave it. Movements are directed and
//! may be gated to a single character class (a class-specific shortcut).
//! Locations never change once the game's map is built.

use serde::{Deserialize, Serialize};

use crate::{CharacterClass, LocationId};

/// A directed edge out of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub to_location: LocationId,
    /// Only characters of this class may take the movement. `None` means anyone.
    #[serde(default)]
    pub required_class: Option<CharacterClass>,
}

impl Movement {
    /// An ungated movement.
    pub fn to(location: LocationId) -> Self {
        Self {
            to_location: location,
            required_class: None,
        }
    }

    pub fn requiring(mut self, class: CharacterClass) -> Self {
        self.required_class = Some(class);
        self
    }

    pub fn is_usable_by(&self, class: CharacterClass) -> bool {
        self.required_class.map_or(true, |required| required == class)
    }
}

/// A node in the maze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    #[serde(default)]
    pub movements: Vec<Movement>,
}

impl Location {
    /// Create a location with no way out.
    pub fn new(id: LocationId) -> Self {
        Self {
            id,
            movements: Vec::new(),
        }
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movements.push(movement);
        self
    }

    /// Outgoing movements a character of `class` is allowed to take, in map order.
    pub fn movements_for(&self, class: CharacterClass) -> impl Iterator<Item = &Movement> + '_ {
        self.movements
            .iter()
            .filter(move |movement| movement.is_usable_by(class))
    }

    pub fn is_dead_end(&self) -> bool {
        self.movements.is_empty()
    }
}
