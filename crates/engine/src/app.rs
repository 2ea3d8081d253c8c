//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::GameStore;
use crate::stores::CharacterLocks;
use crate::use_cases;
use crate::use_cases::characters::{GetCharacter, GetCharacters, MoveCharacter};

/// Main application state.
///
/// Holds the store and all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub store: Arc<dyn GameStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub characters: use_cases::CharacterUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        let locks = Arc::new(CharacterLocks::new());

        let characters = use_cases::CharacterUseCases::new(
            Arc::new(GetCharacters::new(store.clone())),
            Arc::new(GetCharacter::new(store.clone())),
            Arc::new(MoveCharacter::new(store.clone(), locks)),
        );

        Self {
            store,
            use_cases: UseCases { characters },
        }
    }
}
