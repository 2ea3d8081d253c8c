//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate store lookups and domain rules to fulfill user stories.

pub mod characters;

pub use characters::CharacterUseCases;
