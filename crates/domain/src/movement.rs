//! Movement rules.
//!
//! Pure checks over already loaded data. Nothing here suspends or touches a
//! store.

use crate::{Character, LocationId};

/// Whether `character` may move to `destination` from where it stands.
///
/// True iff `destination` is the target of one of the character's available
/// movements. A self-loop is allowed only when the map has one; a dead end
/// rejects every destination.
pub fn is_available(character: &Character, destination: LocationId) -> bool {
    character
        .available_movements()
        .iter()
        .any(|movement| movement.to_location == destination)
}
