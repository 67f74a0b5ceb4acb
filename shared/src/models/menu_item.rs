//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item with its stock counter
///
/// `name` is the natural key checkout looks items up by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    /// Units in stock, never negative
    pub quantity: i64,
}

/// Menu item definition used for seeding the store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub quantity: i64,
}
