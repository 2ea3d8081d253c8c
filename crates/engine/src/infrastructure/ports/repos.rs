//! Repository port traits for game storage.

use async_trait::async_trait;
use maze_domain::{Character, CharacterId, Game, GameId, LocationId};

use super::error::RepoError;

/// Storage of games and the characters inside them.
///
/// Reads have no side effects. `commit_location` is the only mutation and is
/// atomic per character: two commits for the same character never interleave.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameStore: Send + Sync {
    /// A snapshot of the whole game, or `None` if it does not exist.
    async fn find_game(&self, game_id: &GameId) -> Result<Option<Game>, RepoError>;

    /// `None` when either the game or the character is missing.
    async fn find_character(
        &self,
        game_id: &GameId,
        character_id: CharacterId,
    ) -> Result<Option<Character>, RepoError>;

    /// Put the character on `destination` and return its committed state.
    ///
    /// Returns `None` when the game or character no longer exists. The caller
    /// is responsible for deciding that the move is allowed.
    async fn commit_location(
        &self,
        game_id: &GameId,
        character_id: CharacterId,
        destination: LocationId,
    ) -> Result<Option<Character>, RepoError>;

    /// Insert or replace a game.
    async fn save_game(&self, game: Game) -> Result<(), RepoError>;

    async fn list_game_ids(&self) -> Result<Vec<GameId>, RepoError>;
}
