//! The ledger source contract.

use finlens_shared::types::{AccountId, CompanyId, Currency};

use super::account::Account;
use super::balance::PostedBalance;
use super::entry::{DrillDownQuery, JournalLine};
use super::error::LedgerError;

/// Read-only access to the host's ledger.
///
/// Implemented by the host environment (ORM, API client) or by
/// [`InMemoryLedger`](super::InMemoryLedger). All calls are synchronous.
pub trait LedgerSource {
    /// Returns the reporting currency configured for the company.
    fn reporting_currency(&self, company_id: CompanyId) -> Result<Currency, LedgerError>;

    /// Returns the company's non-deprecated accounts.
    fn accounts(&self, company_id: CompanyId) -> Result<Vec<Account>, LedgerError>;

    /// Returns the balance of the account over posted entries only.
    fn posted_balance(&self, account_id: AccountId) -> Result<PostedBalance, LedgerError>;

    /// Returns the journal lines matching a drill-down query, oldest first.
    fn posted_entries(&self, query: &DrillDownQuery) -> Result<Vec<JournalLine>, LedgerError>;
}
