//! Maze Engine library.
//!
//! Server-side code for the maze character API.
//!
//! ## Structure
//!
//! - `use_cases/` - Character queries and the move orchestration
//! - `stores/` - In-process runtime state (per-character move locks)
//! - `infrastructure/` - Store port, in-memory adapter, configuration, seeding
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures shared by module tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
