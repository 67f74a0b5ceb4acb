//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role checks. Every rejection
//! is a 401 carrying the same message so callers cannot tell why a token
//! was refused; the reason goes to the `security` log target instead.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService, Role};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, ErrorCode};

/// Message returned for every authentication or role failure
pub const AUTH_REJECTED: &str = "Please authenticate.";

/// API routes reachable without a token
const PUBLIC_API_ROUTES: &[&str] = &["/api/menu", "/api/checkout"];

fn reject(code: ErrorCode) -> AppError {
    AppError::with_message(code, AUTH_REJECTED)
}

/// Authentication middleware - requires a valid bearer token
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`.
/// On success the [`CurrentUser`] is inserted into request extensions.
///
/// # Skipped paths
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (health checks)
/// - requests no route matched, so unknown paths keep their 404
/// - public API routes (menu listing, checkout)
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // The fallback carries no MatchedPath
    if req.extensions().get::<MatchedPath>().is_none() {
        return Ok(next.run(req).await);
    }

    if PUBLIC_API_ROUTES.contains(&path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => match JwtService::extract_from_header(header) {
            Some(token) => token,
            None => {
                security_log!("WARN", "auth_malformed_header", uri = req.uri().to_string());
                return Err(reject(ErrorCode::TokenInvalid));
            }
        },
        None => {
            security_log!("WARN", "auth_missing", uri = req.uri().to_string());
            return Err(reject(ErrorCode::NotAuthenticated));
        }
    };

    match state.get_jwt_service().validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                uri = req.uri().to_string()
            );

            match e {
                JwtError::ExpiredToken => Err(reject(ErrorCode::TokenExpired)),
                _ => Err(reject(ErrorCode::TokenInvalid)),
            }
        }
    }
}

/// Role gate - admits only callers whose role is in `roles`
///
/// Must sit inside [`require_auth`].
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/daily", get(handler::daily))
///     .route_layer(middleware::from_fn(require_role(&[Role::Manager])));
/// ```
pub fn require_role(
    roles: &'static [Role],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let Some(user) = req.extensions().get::<CurrentUser>() else {
                return Err(reject(ErrorCode::NotAuthenticated));
            };

            if !user.has_any_role(roles) {
                security_log!(
                    "WARN",
                    "role_denied",
                    user_id = user.id.clone(),
                    user_role = user.role.as_str(),
                    uri = req.uri().to_string()
                );
                return Err(reject(ErrorCode::RoleRequired));
            }

            tracing::debug!(user_id = %user.id, role = %user.role, "Role check passed");
            Ok(next.run(req).await)
        })
    }
}
