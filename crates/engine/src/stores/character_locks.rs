//! Per-character move serialization.

use std::sync::Arc;

use dashmap::DashMap;
use maze_domain::{CharacterId, GameId};
use tokio::sync::{Mutex, OwnedMutexGuard};

type CharacterKey = (GameId, CharacterId);

/// One async mutex per character that currently has a move in flight.
///
/// Moves of the same character queue on the same mutex; moves of different
/// characters never share one. An entry is dropped again once nobody holds
/// or waits for it.
#[derive(Default)]
pub struct CharacterLocks {
    locks: DashMap<CharacterKey, Arc<Mutex<()>>>,
}

impl CharacterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to the character.
    pub async fn acquire(&self, game_id: &GameId, character_id: CharacterId) -> CharacterLockGuard<'_> {
        let key = (game_id.clone(), character_id);
        // The shard guard from `entry` must be released before awaiting.
        let lock = self.locks.entry(key.clone()).or_default().clone();
        let guard = lock.lock_owned().await;

        CharacterLockGuard {
            locks: self,
            key,
            guard: Some(guard),
        }
    }

    /// Characters with a lock entry, held or awaited.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one character, released on drop.
pub struct CharacterLockGuard<'a> {
    locks: &'a CharacterLocks,
    key: CharacterKey,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for CharacterLockGuard<'_> {
    fn drop(&mut self) {
        // Release first so the guard's own Arc no longer counts.
        drop(self.guard.take());
        self.locks
            .locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}
