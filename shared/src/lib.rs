//! Shared types for the canteen backend
//!
//! Common types used across crates: domain models, the unified error
//! system and small time/id helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
