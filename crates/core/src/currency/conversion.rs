//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Round converted amounts to `CONVERSION_SCALE` places
//! - Use banker's rounding (round half to even)
//! - Keep both original and converted amounts on report rows

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places kept on converted amounts.
pub const CONVERSION_SCALE: u32 = 4;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Decimal {
    let converted = amount * rate;
    converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
