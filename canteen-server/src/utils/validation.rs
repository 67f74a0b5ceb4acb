//! Input validation helpers
//!
//! Centralized limits and checks shared by checkout and menu seeding.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;

/// Menu item names
pub const MAX_NAME_LEN: usize = 200;

/// Upper bound for one cart line
pub const MAX_LINE_QUANTITY: i64 = 9_999;

/// Upper bound for distinct lines in one cart
pub const MAX_CART_LINES: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an amount is finite and non-negative
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}
