//! Request extractors that reject with [`AppError`]
//!
//! axum's own `Json` answers a bad body with a 4xx plain-text rejection.
//! Handlers use [`AppJson`] so a malformed body gets the same
//! `ApiResponse` envelope as every other validation failure.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use super::AppError;

/// JSON body extractor mapping every rejection to `ValidationFailed` (400)
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected request body");
                Err(AppError::validation(rejection.body_text()))
            }
        }
    }
}
