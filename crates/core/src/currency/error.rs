//! Currency conversion error types.

use thiserror::Error;

/// Errors a currency converter can report.
///
/// A missing rate is not an error: converters answer `Ok(None)` and the
/// caller treats the amount as unavailable.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The rate service could not be queried.
    #[error("Currency conversion unavailable: {0}")]
    Unavailable(String),
}
