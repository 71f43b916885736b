//! Report error types.

use finlens_shared::AppError;
use thiserror::Error;

use crate::currency::ConversionError;
use crate::ledger::LedgerError;

/// Errors that can occur during report generation.
///
/// Missing amounts are never errors; they count as zero. Only an unreachable
/// collaborator aborts a run, and then no report is produced at all.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The ledger or the rate service could not be queried.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),
}

impl From<LedgerError> for ReportError {
    fn from(err: LedgerError) -> Self {
        Self::DataUnavailable(err.to_string())
    }
}

impl From<ConversionError> for ReportError {
    fn from(err: ConversionError) -> Self {
        Self::DataUnavailable(err.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::DataUnavailable(msg) => Self::ExternalService(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_becomes_data_unavailable() {
        let err: ReportError = LedgerError::Unavailable("timeout".into()).into();
        assert_eq!(err.to_string(), "Data unavailable: Ledger unavailable: timeout");
    }

    #[test]
    fn test_maps_to_external_service() {
        let err: AppError = ReportError::from(ConversionError::Unavailable("503".into())).into();
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");
    }
}
