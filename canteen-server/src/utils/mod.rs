//! Utility module - common helpers and types
//!
//! - [`AppError`] / [`ApiResponse`] - re-exported from `shared::error`
//! - [`extract`] - JSON body extractor with `AppError` rejections
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - business timezone conversions
//! - [`validation`] - input limits

pub mod extract;
pub mod logger;
pub mod time;
pub mod validation;

pub use extract::AppJson;
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
