//! Menu seeding from a JSON file
//!
//! The file holds an array of [`MenuItemCreate`]. Items whose name already
//! exists are left untouched, so restarting never resets stock.

use std::path::Path;

use shared::models::MenuItemCreate;
use sqlx::SqlitePool;

use crate::db::repository::menu_item;
use crate::utils::validation::{MAX_NAME_LEN, MAX_URL_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Read and insert the seed file, returning how many items were new
pub async fn seed_menu_from_file(pool: &SqlitePool, path: impl AsRef<Path>) -> AppResult<usize> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_request(format!("Cannot read menu seed {}: {e}", path.display()))
    })?;
    let items: Vec<MenuItemCreate> = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_request(format!("Invalid menu seed {}: {e}", path.display()))
    })?;
    seed_menu(pool, &items).await
}

pub async fn seed_menu(pool: &SqlitePool, items: &[MenuItemCreate]) -> AppResult<usize> {
    let mut inserted = 0;
    for item in items {
        validate_required_text(&item.name, "name", MAX_NAME_LEN)?;
        if item.image_url.len() > MAX_URL_LEN {
            return Err(AppError::validation(format!(
                "imageUrl for {} is too long",
                item.name
            )));
        }
        if menu_item::insert_if_absent(pool, item).await? {
            tracing::debug!(item = %item.name, quantity = item.quantity, "Seeded menu item");
            inserted += 1;
        }
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{stock_of, test_pool};

    #[tokio::test]
    async fn test_seed_file_is_idempotent() {
        let (pool, dir) = test_pool().await;
        let path = dir.path().join("menu.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Samosa", "price": 30, "category": "Snacks", "quantity": 5},
                {"name": "Chai", "price": 10, "category": "Drinks", "imageUrl": "/img/chai.png", "quantity": 40}
            ]"#,
        )
        .unwrap();

        assert_eq!(seed_menu_from_file(&pool, &path).await.unwrap(), 2);
        assert_eq!(seed_menu_from_file(&pool, &path).await.unwrap(), 0);
        assert_eq!(stock_of(&pool, "Samosa").await, 5);

        let menu = menu_item::find_all(&pool).await.unwrap();
        let chai = menu.iter().find(|item| item.name == "Chai").unwrap();
        assert_eq!(chai.image_url, "/img/chai.png");
    }

    #[tokio::test]
    async fn test_seed_rejects_bad_json() {
        let (pool, dir) = test_pool().await;
        let path = dir.path().join("menu.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(seed_menu_from_file(&pool, &path).await.is_err());
    }

    #[tokio::test]
    async fn test_seed_rejects_blank_name() {
        let (pool, _dir) = test_pool().await;
        let items = vec![MenuItemCreate {
            name: "  ".into(),
            price: 1.0,
            category: "Snacks".into(),
            image_url: String::new(),
            quantity: 1,
        }];
        assert!(seed_menu(&pool, &items).await.is_err());
    }
}
