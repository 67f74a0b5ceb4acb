//! Unified error codes for the canteen backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Menu / stock errors
//! - 7xxx: Report errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can switch on
/// a stable number instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Not authenticated
    NotAuthenticated = 1001,
    /// Token expired
    TokenExpired = 1003,
    /// Token invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Caller's role is not admitted by the route
    RoleRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order was already redeemed
    OrderAlreadyRedeemed = 4002,
    /// Order has not been paid
    OrderNotPaid = 4003,
    /// Cart contains no items
    OrderEmpty = 4004,
    /// Cart line quantity is not a positive integer
    InvalidQuantity = 4005,
    /// Claimed total does not match the menu prices
    TotalMismatch = 4006,

    // ==================== 6xxx: Menu ====================
    /// Item is sold out or short of the requested quantity
    OutOfStock = 6003,

    // ==================== 7xxx: Report ====================
    /// No qualifying orders in the report window
    ReportNoData = 7301,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "Please authenticate.",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::RoleRequired => "Please authenticate.",

            // Order
            ErrorCode::OrderNotFound => "Invalid QR Code. Order not found.",
            ErrorCode::OrderAlreadyRedeemed => "This order has already been redeemed.",
            ErrorCode::OrderNotPaid => "This order has not been paid for yet.",
            ErrorCode::OrderEmpty => "Order must contain at least one item",
            ErrorCode::InvalidQuantity => "Quantity must be a positive integer",
            ErrorCode::TotalMismatch => "Total amount does not match menu prices",

            // Menu
            ErrorCode::OutOfStock => "Item is sold out or not enough in stock",

            // Report
            ErrorCode::ReportNoData => "No orders found for the requested day",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2002 => Ok(ErrorCode::RoleRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderAlreadyRedeemed),
            4003 => Ok(ErrorCode::OrderNotPaid),
            4004 => Ok(ErrorCode::OrderEmpty),
            4005 => Ok(ErrorCode::InvalidQuantity),
            4006 => Ok(ErrorCode::TotalMismatch),

            // Menu
            6003 => Ok(ErrorCode::OutOfStock),

            // Report
            7301 => Ok(ErrorCode::ReportNoData),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
