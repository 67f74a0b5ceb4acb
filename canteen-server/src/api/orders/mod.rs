//! Order API Module
//!
//! Counter staff scan the customer's QR code to hand the order out.

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::{Role, require_role};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/scan", post(handler::scan))
        .route_layer(middleware::from_fn(require_role(&[Role::Staff, Role::Manager])))
}
