//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary math is done in `Decimal` internally and converted back to
//! `f64` for storage/serialization, rounded to 2 decimal places half-up.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Subtract two stored amounts precisely: `a - b`, sign preserved
pub fn subtract(a: f64, b: f64) -> f64 {
    to_f64(to_decimal(a) - to_decimal(b))
}

/// Sum stored amounts precisely
pub fn sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let total: Decimal = values.into_iter().map(to_decimal).sum();
    to_f64(total)
}
