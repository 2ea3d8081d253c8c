//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in the game store:
//! - `CharacterLocks` - Per-character serialization of moves

pub mod character_locks;

pub use character_locks::{CharacterLockGuard, CharacterLocks};
