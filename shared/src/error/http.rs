//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::OrderNotFound | Self::ReportNoData => StatusCode::NOT_FOUND,

            // 401 Unauthorized (a role outside the allow-list is reported the
            // same way as a missing token)
            Self::NotAuthenticated
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::RoleRequired => StatusCode::UNAUTHORIZED,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and business rule errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
