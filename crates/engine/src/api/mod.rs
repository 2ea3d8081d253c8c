//! API layer - HTTP entry points.

pub mod auth;
pub mod http;
pub mod patch;
