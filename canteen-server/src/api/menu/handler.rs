//! Menu API Handlers

use axum::{Json, extract::State};
use shared::models::MenuItem;

use crate::core::ServerState;
use crate::db::repository::menu_item;
use crate::utils::AppResult;

/// List all menu items, grouped by category
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.pool).await?;
    Ok(Json(items))
}
