//! Port traits for infrastructure boundaries.
//!
//! The store is the only abstraction the use cases depend on. Everything
//! else is concrete.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::GameStore;

#[cfg(test)]
pub use repos::MockGameStore;
