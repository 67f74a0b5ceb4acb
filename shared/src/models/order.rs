//! Order Model

use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// `PendingPayment -> Paid -> Redeemed`. Checkout creates orders directly as
/// `Paid`; only redemption moves an order forward after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Redeemed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPayment => "PENDING_PAYMENT",
            Self::Paid => "PAID",
            Self::Redeemed => "REDEEMED",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::PendingPayment
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line snapshot copied from the menu at order time (independent table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub name: String,
    /// Unit price at order time
    pub price: f64,
    pub quantity: i64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub total_amount: f64,
    pub status: OrderStatus,
    /// Creation time (Unix millis)
    pub order_timestamp: i64,
    /// Redemption time (Unix millis), null until scanned
    pub redeemed_at: Option<i64>,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Cart line submitted to checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub name: String,
    pub quantity: i64,
}

/// Checkout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CartLine>,
    pub total_amount: f64,
}

/// Successful checkout result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: i64,
    pub total_amount: f64,
}
