//! In-memory game store.
//!
//! Games live in a `DashMap` keyed by game id. A commit takes the game's
//! shard write lock for the duration of the relocation, so it is atomic per
//! character and never blocks games on other shards.

use async_trait::async_trait;
use dashmap::DashMap;
use maze_domain::{Character, CharacterId, DomainError, Game, GameId, LocationId};

use crate::infrastructure::ports::{GameStore, RepoError};

#[derive(Default)]
pub struct InMemoryGameStore {
    games: DashMap<GameId, Game>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        let store = Self::new();
        for game in games {
            store.games.insert(game.id().clone(), game);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn find_game(&self, game_id: &GameId) -> Result<Option<Game>, RepoError> {
        Ok(self.games.get(game_id).map(|game| game.clone()))
    }

    async fn find_character(
        &self,
        game_id: &GameId,
        character_id: CharacterId,
    ) -> Result<Option<Character>, RepoError> {
        Ok(self
            .games
            .get(game_id)
            .and_then(|game| game.character(character_id).cloned()))
    }

    async fn commit_location(
        &self,
        game_id: &GameId,
        character_id: CharacterId,
        destination: LocationId,
    ) -> Result<Option<Character>, RepoError> {
        let Some(mut game) = self.games.get_mut(game_id) else {
            return Ok(None);
        };

        match game.relocate_character(character_id, destination) {
            Ok(character) => {
                tracing::debug!(
                    game_id = %game_id,
                    character_id = %character_id,
                    location = %destination,
                    "Committed character location"
                );
                Ok(Some(character.clone()))
            }
            Err(DomainError::UnknownCharacter { .. }) => Ok(None),
            Err(e) => Err(RepoError::constraint(e)),
        }
    }

    async fn save_game(&self, game: Game) -> Result<(), RepoError> {
        tracing::debug!(
            game_id = %game.id(),
            characters = game.characters().len(),
            "Saving game"
        );
        self.games.insert(game.id().clone(), game);
        Ok(())
    }

    async fn list_game_ids(&self) -> Result<Vec<GameId>, RepoError> {
        let mut ids: Vec<GameId> = self.games.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sample_game, ROGUE_ID, WARRIOR_ID};

    #[tokio::test]
    async fn lookups_return_snapshots() {
        let store = InMemoryGameStore::with_games([sample_game()]);
        let game_id = GameId::new("g1");

        let game = store.find_game(&game_id).await.unwrap().unwrap();
        assert_eq!(game.characters().len(), 2);

        let warrior = store
            .find_character(&game_id, WARRIOR_ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(warrior.location(), LocationId::new(1));

        assert!(store
            .find_character(&GameId::new("g2"), WARRIOR_ID)
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_character(&game_id, CharacterId::new(404))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn commit_updates_location_and_movements() {
        let store = InMemoryGameStore::with_games([sample_game()]);
        let game_id = GameId::new("g1");

        let committed = store
            .commit_location(&game_id, ROGUE_ID, LocationId::new(3))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(committed.location(), LocationId::new(3));

        let reread = store.find_character(&game_id, ROGUE_ID).await.unwrap();
        assert_eq!(reread, Some(committed));
    }

    #[tokio::test]
    async fn commit_reports_absence_without_error() {
        let store = InMemoryGameStore::with_games([sample_game()]);

        let missing_game = store
            .commit_location(&GameId::new("nope"), WARRIOR_ID, LocationId::new(2))
            .await
            .unwrap();
        assert!(missing_game.is_none());

        let missing_character = store
            .commit_location(&GameId::new("g1"), CharacterId::new(99), LocationId::new(2))
            .await
            .unwrap();
        assert!(missing_character.is_none());
    }

    #[tokio::test]
    async fn commit_to_unknown_location_is_a_constraint_violation() {
        let store = InMemoryGameStore::with_games([sample_game()]);

        let err = store
            .commit_location(&GameId::new("g1"), WARRIOR_ID, LocationId::new(77))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn save_and_list_games() {
        let store = InMemoryGameStore::new();
        assert!(store.is_empty());

        store.save_game(Game::new("b")).await.unwrap();
        store.save_game(Game::new("a")).await.unwrap();
        store.save_game(Game::new("a")).await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.list_game_ids().await.unwrap(),
            vec![GameId::new("a"), GameId::new("b")]
        );
    }
}
