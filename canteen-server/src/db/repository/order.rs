//! Order Repository
//!
//! Orders and their item snapshots (`order_item`). Snapshots are written once
//! at checkout and never updated; the only mutable column is `status` (plus
//! `redeemed_at`, set together with it).

use std::collections::HashMap;

use super::RepoResult;
use shared::models::{Order, OrderItem, OrderStatus};
use sqlx::{SqliteConnection, SqlitePool};

const ORDER_COLUMNS: &str = "SELECT id, total_amount, status, order_timestamp, redeemed_at FROM orders";

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    order_id: i64,
    name: String,
    price: f64,
    quantity: i64,
}

/// Insert a new order and its item snapshots on the caller's transaction
pub async fn insert(conn: &mut SqliteConnection, order: &Order) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO orders (id, total_amount, status, order_timestamp, redeemed_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(order.id)
    .bind(order.total_amount)
    .bind(order.status)
    .bind(order.order_timestamp)
    .bind(order.redeemed_at)
    .execute(&mut *conn)
    .await?;

    for (position, item) in order.items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO order_item (order_id, position, name, price, quantity) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(order.id)
        .bind(position as i64)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let Some(mut order) = sqlx::query_as::<_, Order>(&format!("{ORDER_COLUMNS} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    order.items = sqlx::query_as::<_, OrderItem>(
        "SELECT name, price, quantity FROM order_item WHERE order_id = ? ORDER BY position",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;
    Ok(Some(order))
}

pub async fn find_status(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderStatus>> {
    let status = sqlx::query_scalar::<_, OrderStatus>("SELECT status FROM orders WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(status)
}

/// Compare-and-set PAID -> REDEEMED
///
/// Returns `true` only for the single caller whose update matched.
pub async fn mark_redeemed(pool: &SqlitePool, id: i64, redeemed_at: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE orders SET status = 'REDEEMED', redeemed_at = ?1 WHERE id = ?2 AND status = 'PAID'",
    )
    .bind(redeemed_at)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();
    Ok(rows == 1)
}

/// Orders in `[start_millis, end_millis)` whose status is PAID or REDEEMED,
/// oldest first, items in snapshot order
pub async fn find_settled_in_range(
    pool: &SqlitePool,
    start_millis: i64,
    end_millis: i64,
) -> RepoResult<Vec<Order>> {
    let mut orders = sqlx::query_as::<_, Order>(&format!(
        "{ORDER_COLUMNS} WHERE order_timestamp >= ?1 AND order_timestamp < ?2 AND status IN ('PAID', 'REDEEMED') ORDER BY order_timestamp, id"
    ))
    .bind(start_millis)
    .bind(end_millis)
    .fetch_all(pool)
    .await?;

    if orders.is_empty() {
        return Ok(orders);
    }

    let rows = sqlx::query_as::<_, OrderItemRow>(
        "SELECT oi.order_id, oi.name, oi.price, oi.quantity FROM order_item oi \
         JOIN orders o ON o.id = oi.order_id \
         WHERE o.order_timestamp >= ?1 AND o.order_timestamp < ?2 AND o.status IN ('PAID', 'REDEEMED') \
         ORDER BY oi.order_id, oi.position",
    )
    .bind(start_millis)
    .bind(end_millis)
    .fetch_all(pool)
    .await?;

    let mut by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for row in rows {
        by_order.entry(row.order_id).or_default().push(OrderItem {
            name: row.name,
            price: row.price,
            quantity: row.quantity,
        });
    }
    for order in &mut orders {
        order.items = by_order.remove(&order.id).unwrap_or_default();
    }
    Ok(orders)
}
