//! List characters use case.

use std::sync::Arc;

use maze_domain::{Character, GameId, Outcome, ReadGameError};

use crate::infrastructure::ports::{GameStore, RepoError};

/// Lists every character of a game, in the order they joined.
pub struct GetCharacters {
    store: Arc<dyn GameStore>,
}

impl GetCharacters {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        game_id: &GameId,
    ) -> Result<Outcome<Vec<Character>, ReadGameError>, RepoError> {
        let game = self.store.find_game(game_id).await?;

        Ok(Outcome::found(game, ReadGameError::NotFound)
            .map_success(|game| game.characters().to_vec()))
    }
}
