//! Order API Handlers

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::Order;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::orders::{self, OrderIdInput};
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub order_id: OrderIdInput,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub message: &'static str,
    pub order: Order,
}

/// Redeem a scanned order
pub async fn scan(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(payload): AppJson<ScanRequest>,
) -> AppResult<Json<ScanResponse>> {
    let order_id = payload.order_id.resolve()?;
    let order = orders::redeem(&state.pool, order_id).await?;

    tracing::info!(
        order_id,
        user_id = %user.id,
        role = %user.role,
        "Order handed out"
    );

    Ok(Json(ScanResponse {
        message: "Order Redeemed Successfully!",
        order,
    }))
}
