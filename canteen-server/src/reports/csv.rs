//! CSV export of report rows
//!
//! The header comes from the serialized field names of [`ReportRow`].

use shared::models::ReportRow;

use crate::utils::{AppError, AppResult};

pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Attachment file name for the report of `date`
pub fn file_name(date: &str) -> String {
    format!("daily-report-{date}.csv")
}

pub fn to_csv(rows: &[ReportRow]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::internal(format!("CSV serialization failed: {e}")))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV flush failed: {e}")))
}
