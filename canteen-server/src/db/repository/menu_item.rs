//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_COLUMNS: &str = "SELECT id, name, price, category, image_url, quantity FROM menu_item";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "{SELECT_COLUMNS} ORDER BY category, name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Insert a menu item unless one with the same name exists
///
/// Returns `true` when a row was written.
pub async fn insert_if_absent(pool: &SqlitePool, data: &MenuItemCreate) -> RepoResult<bool> {
    if data.price < 0.0 || !data.price.is_finite() {
        return Err(RepoError::Validation(format!(
            "Invalid price for {}: {}",
            data.name, data.price
        )));
    }
    if data.quantity < 0 {
        return Err(RepoError::Validation(format!(
            "Stock for {} cannot be negative: {}",
            data.name, data.quantity
        )));
    }

    let rows = sqlx::query(
        "INSERT OR IGNORE INTO menu_item (id, name, price, category, image_url, quantity) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(shared::util::snowflake_id())
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.category)
    .bind(&data.image_url)
    .bind(data.quantity)
    .execute(pool)
    .await?
    .rows_affected();
    Ok(rows > 0)
}

/// Atomically take `quantity` units of `name` out of stock
///
/// Check and decrement are one statement, so concurrent callers can never
/// drive the counter below zero. Returns the unit price on success and
/// `None` when the item is missing or short. Runs on the caller's
/// transaction so a later failure rolls the decrement back.
pub async fn reserve_stock(
    conn: &mut SqliteConnection,
    name: &str,
    quantity: i64,
) -> RepoResult<Option<f64>> {
    let price = sqlx::query_scalar::<_, f64>(
        "UPDATE menu_item SET quantity = quantity - ?1 WHERE name = ?2 AND quantity >= ?1 RETURNING price",
    )
    .bind(quantity)
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(price)
}
