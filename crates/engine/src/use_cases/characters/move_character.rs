//! Move character use case.
//!
//! Resolves the game, then the character, checks the destination exists,
//! checks the character may go there, and commits. The first failing step
//! decides the error and nothing after it runs.

use std::sync::Arc;

use maze_domain::{
    movement, CharacterId, Game, GameId, LocationId, MoveCharacterError, Outcome,
};

use crate::infrastructure::ports::{GameStore, RepoError};
use crate::stores::CharacterLocks;

/// Move character use case.
///
/// Moves of the same character are serialized through [`CharacterLocks`]: the
/// lock is taken before the character is read and held until the commit, so a
/// second move always decides against the first one's committed location.
pub struct MoveCharacter {
    store: Arc<dyn GameStore>,
    locks: Arc<CharacterLocks>,
}

impl MoveCharacter {
    pub fn new(store: Arc<dyn GameStore>, locks: Arc<CharacterLocks>) -> Self {
        Self { store, locks }
    }

    /// Execute the move.
    ///
    /// # Returns
    /// * `Ok(Outcome::Success(()))` - The move is committed; re-read the
    ///   character for its new state
    /// * `Ok(Outcome::Failure(_))` - The move was refused; nothing changed
    /// * `Err(RepoError)` - The store failed; the outcome is unknown
    pub async fn execute(
        &self,
        game_id: &GameId,
        character_id: CharacterId,
        destination: LocationId,
    ) -> Result<Outcome<(), MoveCharacterError>, RepoError> {
        let game = self.store.find_game(game_id).await?;

        let outcome = Outcome::found(game, MoveCharacterError::GameNotFound)
            .and_then_async(move |game| self.move_within(game, character_id, destination))
            .await?;

        match &outcome {
            Outcome::Success(()) => tracing::info!(
                game_id = %game_id,
                character_id = %character_id,
                destination = %destination,
                "Character moved"
            ),
            Outcome::Failure(reason) => tracing::debug!(
                game_id = %game_id,
                character_id = %character_id,
                destination = %destination,
                reason = %reason,
                "Move rejected"
            ),
        }

        Ok(outcome)
    }

    async fn move_within(
        &self,
        game: Game,
        character_id: CharacterId,
        destination: LocationId,
    ) -> Result<Outcome<(), MoveCharacterError>, RepoError> {
        let _lock = self.locks.acquire(game.id(), character_id).await;

        let character = self.store.find_character(game.id(), character_id).await?;

        Outcome::found(character, MoveCharacterError::CharacterNotFound)
            .and_then(|character| {
                Outcome::ensure(
                    game.has_location(destination),
                    character,
                    MoveCharacterError::LocationNotFound,
                )
            })
            .and_then(|character| {
                Outcome::ensure(
                    movement::is_available(&character, destination),
                    (),
                    MoveCharacterError::NotAnAvailableMovement,
                )
            })
            .and_then_async(|()| async move {
                let committed = self
                    .store
                    .commit_location(game.id(), character_id, destination)
                    .await?;
                // The character can only vanish here if the game was torn down mid-move.
                Ok::<_, RepoError>(
                    Outcome::found(committed, MoveCharacterError::CharacterNotFound)
                        .map_success(|_| ()),
                )
            })
            .await
    }
}
