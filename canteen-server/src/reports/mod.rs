//! Daily sales report
//!
//! Flattens the PAID and REDEEMED orders of one business day into one row
//! per (order, item). Day boundaries follow the configured business
//! timezone.

pub mod csv;

use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::models::ReportRow;
use sqlx::SqlitePool;

use crate::db::repository::order;
use crate::orders::money::{line_total, unit_price};
use crate::utils::time;
use crate::utils::{AppError, AppResult};

pub use self::csv::to_csv;

/// Build the report rows for `date`
///
/// Fails with `ReportNoData` when the day has no settled orders.
pub async fn daily_report(pool: &SqlitePool, date: NaiveDate, tz: Tz) -> AppResult<Vec<ReportRow>> {
    let start = time::day_start_millis(date, tz);
    let end = time::day_end_millis(date, tz);
    let date_str = date.format("%Y-%m-%d").to_string();

    let orders = order::find_settled_in_range(pool, start, end).await?;
    if orders.is_empty() {
        return Err(AppError::no_data(date_str));
    }

    let mut rows = Vec::new();
    for order in &orders {
        let local = time::to_local(order.order_timestamp, tz);
        let day = local
            .as_ref()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| date_str.clone());
        let clock = local
            .as_ref()
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default();

        for item in &order.items {
            rows.push(ReportRow {
                order_id: order.id,
                status: order.status,
                date: day.clone(),
                time: clock.clone(),
                item_name: item.name.clone(),
                quantity: item.quantity,
                price: unit_price(item.price),
                item_total: line_total(item.price, item.quantity),
            });
        }
    }

    tracing::info!(
        date = %date_str,
        orders = orders.len(),
        rows = rows.len(),
        "Daily report generated"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;
    use crate::utils::ErrorCode;
    use rust_decimal::Decimal;
    use shared::models::{Order, OrderItem, OrderStatus};

    // 2026-01-15T00:00:00Z
    const DAY_START: i64 = 1_768_435_200_000;

    async fn save(pool: &SqlitePool, id: i64, ts: i64, status: OrderStatus, items: &[(&str, f64, i64)]) {
        let order = Order {
            id,
            total_amount: items.iter().map(|(_, p, q)| p * *q as f64).sum(),
            status,
            order_timestamp: ts,
            redeemed_at: None,
            items: items
                .iter()
                .map(|(n, p, q)| OrderItem {
                    name: n.to_string(),
                    price: *p,
                    quantity: *q,
                })
                .collect(),
        };
        let mut tx = pool.begin().await.unwrap();
        order::insert(&mut tx, &order).await.unwrap();
        tx.commit().await.unwrap();
    }

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn test_one_row_per_order_item() {
        let (pool, _dir) = test_pool().await;
        // 09:30:00 UTC
        save(&pool, 1, DAY_START + 34_200_000, OrderStatus::Paid, &[("Samosa", 30.0, 3), ("Chai", 10.0, 2)]).await;
        save(&pool, 2, DAY_START + 36_000_000, OrderStatus::Paid, &[("Dosa", 12.5, 2)]).await;
        order::mark_redeemed(&pool, 2, DAY_START + 36_500_000).await.unwrap();
        // Previous day and unpaid orders are excluded
        save(&pool, 3, DAY_START - 1, OrderStatus::Paid, &[("Idli", 20.0, 1)]).await;
        save(&pool, 4, DAY_START + 1_000, OrderStatus::PendingPayment, &[("Vada", 15.0, 1)]).await;

        let rows = daily_report(&pool, jan_15(), Tz::UTC).await.unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].order_id, 1);
        assert_eq!(rows[0].date, "2026-01-15");
        assert_eq!(rows[0].time, "09:30:00");
        assert_eq!(rows[0].item_name, "Samosa");
        assert_eq!(rows[0].item_total, Decimal::new(9000, 2));
        assert_eq!(rows[1].item_name, "Chai");

        assert_eq!(rows[2].order_id, 2);
        assert_eq!(rows[2].status, OrderStatus::Redeemed);
        assert_eq!(rows[2].item_total.to_string(), "25.00");
        for row in &rows {
            assert_eq!(row.item_total, row.price * Decimal::from(row.quantity));
        }
    }

    #[tokio::test]
    async fn test_item_total_matches_printed_price() {
        let (pool, _dir) = test_pool().await;
        save(&pool, 1, DAY_START + 1_000, OrderStatus::Paid, &[("Odd", 12.345, 3)]).await;

        let rows = daily_report(&pool, jan_15(), Tz::UTC).await.unwrap();
        assert_eq!(rows[0].price.to_string(), "12.35");
        assert_eq!(rows[0].item_total.to_string(), "37.05");
        assert_eq!(rows[0].item_total, rows[0].price * Decimal::from(rows[0].quantity));

        let csv = String::from_utf8(to_csv(&rows).unwrap()).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(",Odd,3,12.35,37.05"), "{csv}");
    }

    #[tokio::test]
    async fn test_empty_day_is_no_data() {
        let (pool, _dir) = test_pool().await;
        save(&pool, 1, DAY_START + 1_000, OrderStatus::PendingPayment, &[("Vada", 15.0, 1)]).await;

        let err = daily_report(&pool, jan_15(), Tz::UTC).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportNoData);
        assert_eq!(err.message, "No orders found for 2026-01-15");
    }

    #[tokio::test]
    async fn test_business_timezone_moves_the_window() {
        let (pool, _dir) = test_pool().await;
        // 2026-01-14T20:00:00Z is 2026-01-15 01:30 in Asia/Kolkata
        save(&pool, 1, DAY_START - 4 * 3_600_000, OrderStatus::Paid, &[("Chai", 10.0, 1)]).await;

        let kolkata = chrono_tz::Asia::Kolkata;
        let rows = daily_report(&pool, jan_15(), kolkata).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2026-01-15");
        assert_eq!(rows[0].time, "01:30:00");

        assert!(daily_report(&pool, jan_15(), Tz::UTC).await.is_err());
    }
}
