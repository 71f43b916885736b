//! Ledger error types.

use finlens_shared::types::{AccountId, CompanyId};
use thiserror::Error;

/// Errors a ledger source can report.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger could not be queried.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// Company not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(CompanyId),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
}
