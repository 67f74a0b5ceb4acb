//! Menu API Module
//!
//! Public, read-only menu listing with current stock.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(handler::list))
}
