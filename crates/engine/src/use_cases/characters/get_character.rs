//! Get character use case.

use std::sync::Arc;

use maze_domain::{Character, CharacterId, GameId, Outcome, ReadCharacterError};

use crate::infrastructure::ports::{GameStore, RepoError};

/// Reads one character.
///
/// The store cannot tell a missing game from a missing character, so the game
/// is resolved first and the character second.
pub struct GetCharacter {
    store: Arc<dyn GameStore>,
}

impl GetCharacter {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        game_id: &GameId,
        character_id: CharacterId,
    ) -> Result<Outcome<Character, ReadCharacterError>, RepoError> {
        let game = self.store.find_game(game_id).await?;

        Outcome::found(game, ReadCharacterError::GameNotFound)
            .and_then_async(|_| async move {
                let character = self.store.find_character(game_id, character_id).await?;
                Ok::<_, RepoError>(Outcome::found(
                    character,
                    ReadCharacterError::CharacterNotFound,
                ))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use maze_domain::{CharacterId, GameId, LocationId, Outcome, ReadCharacterError};

    use super::GetCharacter;
    use crate::infrastructure::ports::{MockGameStore, RepoError};
    use crate::test_fixtures::{sample_game, seeded_store, WARRIOR_ID};

    #[tokio::test]
    async fn when_character_exists_then_returns_its_state() {
        let use_case = GetCharacter::new(seeded_store());

        let outcome = use_case
            .execute(&GameId::new("g1"), WARRIOR_ID)
            .await
            .unwrap();

        let expected = sample_game().character(WARRIOR_ID).cloned();
        assert_eq!(Some(outcome.clone()), expected.map(Outcome::Success));
        let location = outcome.fold(|c| c.location(), |e| panic!("unexpected failure: {e}"));
        assert_eq!(location, LocationId::new(1));
    }

    #[tokio::test]
    async fn when_game_missing_then_game_not_found_wins() {
        let use_case = GetCharacter::new(seeded_store());

        let outcome = use_case
            .execute(&GameId::new("g2"), CharacterId::new(12345))
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Failure(ReadCharacterError::GameNotFound));
    }

    #[tokio::test]
    async fn when_character_missing_then_character_not_found() {
        let use_case = GetCharacter::new(seeded_store());

        let outcome = use_case
            .execute(&GameId::new("g1"), CharacterId::new(12345))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Failure(ReadCharacterError::CharacterNotFound)
        );
    }

    #[tokio::test]
    async fn when_game_missing_then_character_lookup_is_skipped() {
        let mut store = MockGameStore::new();
        store.expect_find_game().times(1).returning(|_| Ok(None));
        store.expect_find_character().never();

        let use_case = GetCharacter::new(Arc::new(store));
        let outcome = use_case
            .execute(&GameId::new("g1"), WARRIOR_ID)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Failure(ReadCharacterError::GameNotFound));
    }

    #[tokio::test]
    async fn when_character_lookup_fails_then_error_propagates() {
        let mut store = MockGameStore::new();
        store
            .expect_find_game()
            .returning(|_| Ok(Some(sample_game())));
        store
            .expect_find_character()
            .withf(|game_id, character_id| game_id.as_str() == "g1" && *character_id == WARRIOR_ID)
            .returning(|_, _| Err(RepoError::database("find_character", "timeout")));

        let use_case = GetCharacter::new(Arc::new(store));
        let err = use_case
            .execute(&GameId::new("g1"), WARRIOR_ID)
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Database { operation: "find_character", .. }));
    }
}
