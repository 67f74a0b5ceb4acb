//! Authentication and authorization
//!
//! - [`JwtService`] - bearer token validation
//! - [`CurrentUser`] - authenticated caller context
//! - [`require_auth`] - token middleware
//! - [`require_role`] - role allow-list middleware

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, Role};
pub use middleware::{AUTH_REJECTED, require_auth, require_role};
