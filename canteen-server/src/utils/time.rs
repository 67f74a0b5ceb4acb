//! Time helpers - business timezone conversions
//!
//! Every date to timestamp conversion happens at the API/report layer;
//! repositories only take `i64` Unix millis.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Local midnight of `date` as Unix millis (business timezone)
///
/// DST gap fallback: if local midnight does not exist, fall back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of the following day as Unix millis (business timezone)
///
/// Callers use `< end` (exclusive) semantics.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day, tz)
}

/// Unix millis → local datetime (business timezone)
pub fn to_local(millis: i64, tz: Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(millis).single()
}
