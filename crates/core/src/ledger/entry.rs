//! Posted journal lines and the drill-down query.

use chrono::NaiveDate;
use finlens_shared::types::{AccountId, EntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// State of the journal entry a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// Not yet finalized; never part of a balance.
    Draft,
    /// Finalized.
    Posted,
    /// Cancelled.
    Cancelled,
}

/// A single journal line on an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Line ID.
    pub id: EntryId,
    /// The account this line books on.
    pub account_id: AccountId,
    /// Accounting date.
    pub date: NaiveDate,
    /// Journal entry reference (e.g. "BNK1/2026/0001").
    pub reference: String,
    /// Line label.
    #[serde(default)]
    pub label: String,
    /// Signed amount in the reporting currency (debit positive).
    pub balance: Decimal,
    /// Signed amount in the account's own currency, if it differs.
    #[serde(default)]
    pub amount_currency: Option<Decimal>,
    /// Entry state.
    pub state: EntryState,
}

impl JournalLine {
    /// Returns true if the line belongs to a posted entry.
    #[must_use]
    pub fn is_posted(&self) -> bool {
        self.state == EntryState::Posted
    }
}

/// Query a presentation layer runs to open the source transactions behind a
/// report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillDownQuery {
    /// Account to list lines for.
    pub account_id: AccountId,
    /// Restrict to lines of posted entries.
    pub posted_only: bool,
}

impl DrillDownQuery {
    /// Query for the posted lines of an account.
    #[must_use]
    pub const fn posted(account_id: AccountId) -> Self {
        Self {
            account_id,
            posted_only: true,
        }
    }

    /// Returns true if `line` satisfies this query.
    #[must_use]
    pub fn matches(&self, line: &JournalLine) -> bool {
        line.account_id == self.account_id && (!self.posted_only || line.is_posted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(account_id: AccountId, state: EntryState) -> JournalLine {
        JournalLine {
            id: EntryId::new(),
            account_id,
            date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            reference: "BNK1/2026/0001".into(),
            label: "Kundenzahlung".into(),
            balance: dec!(120),
            amount_currency: None,
            state,
        }
    }

    #[test]
    fn test_posted_query_skips_drafts() {
        let account_id = AccountId::new();
        let query = DrillDownQuery::posted(account_id);

        assert!(query.matches(&line(account_id, EntryState::Posted)));
        assert!(!query.matches(&line(account_id, EntryState::Draft)));
        assert!(!query.matches(&line(account_id, EntryState::Cancelled)));
        assert!(!query.matches(&line(AccountId::new(), EntryState::Posted)));
    }

    #[test]
    fn test_unrestricted_query_includes_drafts() {
        let account_id = AccountId::new();
        let query = DrillDownQuery {
            account_id,
            posted_only: false,
        };
        assert!(query.matches(&line(account_id, EntryState::Draft)));
    }
}
