//! Checkout API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use shared::models::CheckoutRequest;

use crate::core::ServerState;
use crate::orders::{self, CheckoutOptions};
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: &'static str,
    pub order_id: i64,
}

/// Place an order: reserve stock and record it as PAID
pub async fn checkout(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    let options = CheckoutOptions {
        enforce_total_amount: state.config.enforce_total_amount,
    };
    let receipt = orders::checkout(&state.pool, &payload, options).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            message: "Order created successfully!",
            order_id: receipt.order_id,
        }),
    ))
}
