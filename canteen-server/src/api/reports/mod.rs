//! Report API Module
//!
//! Manager-only exports.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{Role, require_role};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/daily", get(handler::daily))
        .route_layer(middleware::from_fn(require_role(&[Role::Manager])))
}
