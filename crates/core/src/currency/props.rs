//! Property-based tests for currency operations.
//!
//! - Banker's Rounding Correctness
//! - Rate table lookups

use chrono::NaiveDate;
use finlens_shared::types::{CompanyId, Currency};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{CONVERSION_SCALE, convert_amount};
use super::exchange::{ExchangeRate, RateSource};
use super::service::{CurrencyConverter, RateTable};

/// Strategy to generate signed decimal amounts (-1,000,000.00 to 1,000,000.00).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion result is always rounded to 4 decimal places.
    #[test]
    fn prop_convert_rounds_to_4_decimals(
        amount in signed_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate, CONVERSION_SCALE);
        let scaled = result * Decimal::from(10000);
        prop_assert_eq!(
            scaled, scaled.round(),
            "Result {} should have at most 4 decimal places",
            result
        );
    }

    /// Conversion keeps the sign of the amount.
    #[test]
    fn prop_convert_preserves_sign(
        amount in signed_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate, CONVERSION_SCALE);
        if amount > Decimal::ZERO {
            prop_assert!(result >= Decimal::ZERO);
        } else {
            prop_assert!(result <= Decimal::ZERO);
        }
    }

    /// A direct rate always wins over the inverse of the opposite pair.
    #[test]
    fn prop_direct_rate_preferred(
        direct in positive_rate(),
        opposite in positive_rate(),
    ) {
        let table = RateTable::new(vec![
            ExchangeRate::new(Currency::Eur, Currency::Usd, opposite, as_of()),
            ExchangeRate::new(Currency::Usd, Currency::Eur, direct, as_of()),
        ]);
        let lookup = table.find_rate(Currency::Usd, Currency::Eur, as_of()).unwrap();
        prop_assert_eq!(lookup.source, RateSource::Direct);
        prop_assert_eq!(lookup.rate, direct);
    }

    /// Converting there and back through a single stored rate stays within a cent.
    #[test]
    fn prop_inverse_round_trip_within_a_cent(
        amount in signed_amount(),
        rate in (5_000i64..20_000i64).prop_map(|v| Decimal::new(v, 4)),
    ) {
        let table = RateTable::new(vec![
            ExchangeRate::new(Currency::Usd, Currency::Eur, rate, as_of()),
        ]);
        let company = CompanyId::new();
        let there = table
            .convert(amount, Currency::Usd, Currency::Eur, company, as_of())
            .unwrap()
            .unwrap();
        let back = table
            .convert(there, Currency::Eur, Currency::Usd, company, as_of())
            .unwrap()
            .unwrap();
        prop_assert!((back - amount).abs() <= Decimal::new(1, 2));
    }
}
