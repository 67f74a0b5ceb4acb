//! HTTP API
//!
//! | Module | Routes | Auth |
//! |--------|--------|------|
//! | [`health`] | /health, /health/detailed | none |
//! | [`menu`] | GET /api/menu | none |
//! | [`checkout`] | POST /api/checkout | none |
//! | [`orders`] | POST /api/orders/scan | staff, manager |
//! | [`reports`] | GET /api/admin/reports/daily | manager |

pub mod access_log;

pub mod checkout;
pub mod health;
pub mod menu;
pub mod orders;
pub mod reports;

use std::time::Duration;

use axum::Router;
use axum::middleware;
use http::HeaderValue;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;

pub use crate::utils::{AppError, AppResult};

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// All routes, no middleware, no state
pub fn build_routes() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(checkout::router())
        .merge(orders::router())
        .merge(reports::router())
}

/// Routes plus the full middleware stack
///
/// Outermost first: request id, trace, access log, CORS, compression,
/// request deadline, authentication.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    health::mark_started();

    build_routes()
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TimeoutLayer::new(Duration::from_millis(
            state.config.request_timeout_ms,
        )))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(access_log::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
}

/// Application ready to serve
pub fn build_router(state: ServerState) -> Router {
    build_app(&state).with_state(state)
}
