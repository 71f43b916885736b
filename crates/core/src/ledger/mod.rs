//! Ledger data consumed by the reports.
//!
//! This module defines what the host ledger supplies:
//! - Accounts and the fixed account type taxonomy
//! - Posted balances (native and reporting currency)
//! - Journal lines for drill-down
//! - The `LedgerSource` trait and an in-memory implementation

pub mod account;
pub mod balance;
pub mod entry;
pub mod error;
pub mod memory;
pub mod source;

pub use account::{Account, AccountType};
pub use balance::{BalanceRecord, PostedBalance};
pub use entry::{DrillDownQuery, EntryState, JournalLine};
pub use error::LedgerError;
pub use memory::{Company, InMemoryLedger, LedgerSnapshot};
pub use source::LedgerSource;
