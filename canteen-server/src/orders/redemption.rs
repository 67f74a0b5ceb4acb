//! Redemption
//!
//! A paid order can be handed out exactly once. The PAID -> REDEEMED move is
//! a single conditional update, so of several concurrent scans only one
//! wins; the rest are classified from the order's current status.

use serde::Deserialize;
use shared::models::{Order, OrderStatus};
use sqlx::SqlitePool;

use crate::db::repository::order;
use crate::utils::{AppError, AppResult};

/// Order id as scanned from a QR code
///
/// Scanners send either a JSON number or the printed digits as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderIdInput {
    Number(i64),
    Text(String),
}

impl OrderIdInput {
    /// Resolve to a numeric id; anything non-numeric can never match an order
    pub fn resolve(&self) -> AppResult<i64> {
        match self {
            Self::Number(id) => Ok(*id),
            Self::Text(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::order_not_found()),
        }
    }
}

/// Redeem a paid order and return its final state with items
pub async fn redeem(pool: &SqlitePool, order_id: i64) -> AppResult<Order> {
    let now = shared::util::now_millis();

    if order::mark_redeemed(pool, order_id, now).await? {
        tracing::info!(order_id, "Order redeemed");
        return order::find_by_id(pool, order_id).await?.ok_or_else(|| {
            AppError::internal(format!("Order {order_id} vanished after redemption"))
        });
    }

    match order::find_status(pool, order_id).await? {
        None => Err(AppError::order_not_found().with_detail("orderId", order_id)),
        Some(OrderStatus::Redeemed) => {
            tracing::info!(order_id, "Redemption refused: already redeemed");
            Err(AppError::already_redeemed().with_detail("orderId", order_id))
        }
        Some(status) => {
            tracing::info!(order_id, status = %status, "Redemption refused: not paid");
            Err(AppError::not_paid().with_detail("orderId", order_id))
        }
    }
}
