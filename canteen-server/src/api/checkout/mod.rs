//! Checkout API Module
//!
//! Anonymous customers place orders here; no token is required.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/checkout", post(handler::checkout))
}
