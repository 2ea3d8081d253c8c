//! Shared fixtures for engine tests.

use std::sync::Arc;

use maze_domain::{CharacterId, Game};

use crate::infrastructure::memory::InMemoryGameStore;
use crate::infrastructure::seed::demo_definition;

/// Warrior standing on location 1 of `g1`.
pub const WARRIOR_ID: CharacterId = CharacterId::new(7);
/// Rogue standing on location 1 of `g1`; only it can take the shortcut to 3.
pub const ROGUE_ID: CharacterId = CharacterId::new(8);

/// Game `g1`: 1 -> 2 for anyone, 1 -> 3 for rogues, 2 is a dead end, 3 -> 1.
pub fn sample_game() -> Game {
    match Game::from_definition(demo_definition()) {
        Ok(game) => game,
        Err(e) => panic!("demo layout must be valid: {e}"),
    }
}

pub fn seeded_store() -> Arc<InMemoryGameStore> {
    Arc::new(InMemoryGameStore::with_games([sample_game()]))
}
