//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are stored and serialized as `f64`; every calculation goes through
//! `Decimal` and is rounded back to 2 decimal places.

use rust_decimal::prelude::*;

/// 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round to 2 decimal places with a fixed scale (`30` becomes `30.00`)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Unit price as charged and printed, rounded to 2 decimal places
#[inline]
pub fn unit_price(price: f64) -> Decimal {
    round_money(to_decimal(price))
}

/// `quantity × unit price`, using the rounded unit price
pub fn line_total(price: f64, quantity: i64) -> Decimal {
    round_money(unit_price(price) * Decimal::from(quantity))
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
