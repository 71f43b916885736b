//! Exchange rate types and logic.

use chrono::NaiveDate;
use finlens_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub from_currency: Currency,
    /// Target currency.
    pub to_currency: Currency,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(
        from_currency: Currency,
        to_currency: Currency,
        rate: Decimal,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
            effective_date,
        }
    }

    /// Returns the inverse rate, or `None` for a zero rate.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        Some(Self {
            from_currency: self.to_currency,
            to_currency: self.from_currency,
            rate: Decimal::ONE.checked_div(self.rate)?,
            effective_date: self.effective_date,
        })
    }

    /// Returns true if this rate converts `from` into `to` and is effective on `date`.
    #[must_use]
    pub fn applies(&self, from: Currency, to: Currency, date: NaiveDate) -> bool {
        self.from_currency == from && self.to_currency == to && self.effective_date <= date
    }
}

/// How an exchange rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Same currency, rate of one.
    Identity,
    /// Direct rate found (from_currency -> to_currency).
    Direct,
    /// Inverse rate calculated (to_currency -> from_currency, then inverted).
    Inverse,
}

/// Result of an exchange rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLookup {
    /// The exchange rate.
    pub rate: Decimal,
    /// How the rate was obtained.
    pub source: RateSource,
    /// The effective date of the rate.
    pub effective_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
    }

    #[test]
    fn test_inverse() {
        let rate = ExchangeRate::new(Currency::Eur, Currency::Chf, dec!(0.8), date(1));
        let inverse = rate.inverse().unwrap();
        assert_eq!(inverse.from_currency, Currency::Chf);
        assert_eq!(inverse.to_currency, Currency::Eur);
        assert_eq!(inverse.rate, dec!(1.25));
    }

    #[test]
    fn test_inverse_of_zero_rate() {
        let rate = ExchangeRate::new(Currency::Eur, Currency::Usd, Decimal::ZERO, date(1));
        assert!(rate.inverse().is_none());
    }

    #[test]
    fn test_applies_only_from_effective_date() {
        let rate = ExchangeRate::new(Currency::Usd, Currency::Eur, dec!(0.9), date(10));
        assert!(rate.applies(Currency::Usd, Currency::Eur, date(10)));
        assert!(rate.applies(Currency::Usd, Currency::Eur, date(20)));
        assert!(!rate.applies(Currency::Usd, Currency::Eur, date(9)));
        assert!(!rate.applies(Currency::Eur, Currency::Usd, date(20)));
    }
}
