//! Report API Handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::reports::{self, csv};
use crate::utils::{AppResult, time};

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    /// Business date (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
}

/// Daily sales report as a CSV attachment
pub async fn daily(
    State(state): State<ServerState>,
    Query(query): Query<DailyQuery>,
) -> AppResult<impl IntoResponse> {
    let tz = state.config.timezone;
    let date = match query.date.as_deref() {
        Some(raw) => time::parse_date(raw)?,
        None => time::today(tz),
    };

    let rows = reports::daily_report(&state.pool, date, tz).await?;
    let body = reports::to_csv(&rows)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        csv::file_name(&date.format("%Y-%m-%d").to_string())
    );

    Ok((
        [
            (header::CONTENT_TYPE, csv::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
