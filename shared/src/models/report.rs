//! Daily Report Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// One flattened (order, item) row of the daily sales report
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub order_id: i64,
    pub status: OrderStatus,
    /// Business date (YYYY-MM-DD)
    pub date: String,
    /// Local time of day (HH:MM:SS)
    pub time: String,
    pub item_name: String,
    pub quantity: i64,
    pub price: Decimal,
    /// quantity × price
    pub item_total: Decimal,
}
