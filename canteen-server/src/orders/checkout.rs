//! Checkout
//!
//! Validates a cart, reserves stock and records a PAID order in one SQLite
//! transaction. Either every line is reserved and the order is written, or
//! nothing changes.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{CartLine, CheckoutReceipt, CheckoutRequest, Order, OrderItem, OrderStatus};
use sqlx::SqlitePool;

use super::money::{line_total, money_eq, to_decimal, to_f64};
use crate::db::repository::{menu_item, order};
use crate::utils::validation::{
    MAX_CART_LINES, MAX_LINE_QUANTITY, MAX_NAME_LEN, validate_amount, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Checkout behaviour switches
#[derive(Debug, Clone, Copy)]
pub struct CheckoutOptions {
    /// Reject carts whose claimed total differs from menu prices
    pub enforce_total_amount: bool,
}

impl Default for CheckoutOptions {
    fn default() -> Self {
        Self {
            enforce_total_amount: true,
        }
    }
}

/// Validate the cart and merge duplicate names into one line each
///
/// The merged lines drive stock reservation. Line order follows first
/// appearance in the cart.
pub fn normalize_cart(request: &CheckoutRequest) -> AppResult<Vec<CartLine>> {
    if request.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    if request.items.len() > MAX_CART_LINES {
        return Err(AppError::validation(format!(
            "Cart has too many lines (max {MAX_CART_LINES})"
        )));
    }
    validate_amount(request.total_amount, "totalAmount")?;

    let mut lines: Vec<CartLine> = Vec::with_capacity(request.items.len());
    for (index, line) in request.items.iter().enumerate() {
        validate_required_text(&line.name, "name", MAX_NAME_LEN)
            .map_err(|e| e.with_detail("index", index))?;
        if line.quantity <= 0 || line.quantity > MAX_LINE_QUANTITY {
            return Err(AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("item", line.name.clone())
                .with_detail("quantity", line.quantity));
        }

        match lines.iter_mut().find(|l| l.name == line.name) {
            Some(existing) => {
                existing.quantity += line.quantity;
                if existing.quantity > MAX_LINE_QUANTITY {
                    return Err(AppError::new(ErrorCode::InvalidQuantity)
                        .with_detail("item", line.name.clone())
                        .with_detail("quantity", existing.quantity));
                }
            }
            None => lines.push(line.clone()),
        }
    }
    Ok(lines)
}

/// Place an order
///
/// Each merged line is reserved with a conditional decrement on the open
/// transaction. The first line that cannot be satisfied aborts the whole
/// checkout with `OutOfStock` and the transaction rolls back on drop.
/// The stored snapshot keeps the cart lines as submitted.
pub async fn checkout(
    pool: &SqlitePool,
    request: &CheckoutRequest,
    options: CheckoutOptions,
) -> AppResult<CheckoutReceipt> {
    let lines = normalize_cart(request)?;

    let mut tx = pool.begin().await.map_err(crate::db::repository::RepoError::from)?;

    let mut prices: HashMap<&str, f64> = HashMap::with_capacity(lines.len());
    let mut computed_total = Decimal::ZERO;
    for line in &lines {
        let Some(price) = menu_item::reserve_stock(&mut tx, &line.name, line.quantity).await?
        else {
            tracing::info!(
                item = %line.name,
                quantity = line.quantity,
                "Checkout rejected: insufficient stock"
            );
            return Err(AppError::out_of_stock(&line.name));
        };

        computed_total += line_total(price, line.quantity);
        prices.insert(line.name.as_str(), price);
    }

    let mut items = Vec::with_capacity(request.items.len());
    for line in &request.items {
        let price = prices
            .get(line.name.as_str())
            .copied()
            .ok_or_else(|| AppError::internal(format!("No reserved price for {}", line.name)))?;
        items.push(OrderItem {
            name: line.name.clone(),
            price,
            quantity: line.quantity,
        });
    }

    let computed_total = to_f64(computed_total);
    if options.enforce_total_amount && !money_eq(request.total_amount, computed_total) {
        tracing::info!(
            claimed = request.total_amount,
            expected = computed_total,
            "Checkout rejected: total mismatch"
        );
        return Err(AppError::new(ErrorCode::TotalMismatch)
            .with_detail("claimed", request.total_amount)
            .with_detail("expected", computed_total));
    }

    let order = Order {
        id: shared::util::snowflake_id(),
        total_amount: to_f64(to_decimal(request.total_amount)),
        status: OrderStatus::Paid,
        order_timestamp: shared::util::now_millis(),
        redeemed_at: None,
        items,
    };
    order::insert(&mut tx, &order).await?;

    tx.commit()
        .await
        .map_err(crate::db::repository::RepoError::from)?;

    tracing::info!(
        order_id = order.id,
        lines = order.items.len(),
        total = order.total_amount,
        "Order created"
    );

    Ok(CheckoutReceipt {
        order_id: order.id,
        total_amount: order.total_amount,
    })
}
