//! Multi-currency handling and exchange rates.

pub mod conversion;
pub mod error;
pub mod exchange;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::{CONVERSION_SCALE, convert_amount};
pub use error::ConversionError;
pub use exchange::{ExchangeRate, RateLookup, RateSource};
pub use service::{CurrencyConverter, RateTable};
