//! Currency conversion service.
//!
//! The report asks a [`CurrencyConverter`] for converted amounts; the host
//! environment supplies one backed by its rate service. [`RateTable`] is the
//! in-process implementation over a list of [`ExchangeRate`]s.

use chrono::NaiveDate;
use finlens_shared::types::{CompanyId, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::{CONVERSION_SCALE, convert_amount};
use super::error::ConversionError;
use super::exchange::{ExchangeRate, RateLookup, RateSource};

/// Converts amounts between currencies.
pub trait CurrencyConverter {
    /// Converts `amount` from `from` into `to` at the rate effective on `as_of`.
    ///
    /// Returns `Ok(None)` when no rate is known. Must not fail for a zero
    /// amount.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Unavailable` if the rate service cannot be
    /// reached.
    fn convert(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
        company_id: CompanyId,
        as_of: NaiveDate,
    ) -> Result<Option<Decimal>, ConversionError>;
}

/// Exchange rates held in memory, shared by all companies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: Vec<ExchangeRate>,
}

impl RateTable {
    /// Creates a rate table.
    #[must_use]
    pub fn new(rates: Vec<ExchangeRate>) -> Self {
        Self { rates }
    }

    /// Finds the rate for a currency pair on or before a date.
    ///
    /// Lookup order:
    /// 1. Same currency = rate of 1
    /// 2. Direct rate (from -> to), most recent on or before `date`
    /// 3. Inverse rate (to -> from, then inverted)
    #[must_use]
    pub fn find_rate(&self, from: Currency, to: Currency, date: NaiveDate) -> Option<RateLookup> {
        if from == to {
            return Some(RateLookup {
                rate: Decimal::ONE,
                source: RateSource::Identity,
                effective_date: date,
            });
        }

        if let Some(direct) = self.latest(from, to, date) {
            return Some(RateLookup {
                rate: direct.rate,
                source: RateSource::Direct,
                effective_date: direct.effective_date,
            });
        }

        // If USD/EUR = 0.9, then EUR/USD = 1/0.9
        let inverted = self.latest(to, from, date)?.inverse()?;
        Some(RateLookup {
            rate: inverted.rate,
            source: RateSource::Inverse,
            effective_date: inverted.effective_date,
        })
    }

    fn latest(&self, from: Currency, to: Currency, date: NaiveDate) -> Option<&ExchangeRate> {
        self.rates
            .iter()
            .filter(|r| r.applies(from, to, date))
            .max_by_key(|r| r.effective_date)
    }
}

impl CurrencyConverter for RateTable {
    fn convert(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
        _company_id: CompanyId,
        as_of: NaiveDate,
    ) -> Result<Option<Decimal>, ConversionError> {
        if amount.is_zero() {
            return Ok(Some(Decimal::ZERO));
        }

        Ok(self
            .find_rate(from, to, as_of)
            .map(|lookup| convert_amount(amount, lookup.rate, CONVERSION_SCALE)))
    }
}
