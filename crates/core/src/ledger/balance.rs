//! Posted account balances.

use finlens_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate of an account's posted ledger lines.
///
/// Either amount may be missing: the ledger does not always report the
/// native-currency sum, and sometimes reports only the reporting-currency
/// equivalent even for foreign-currency accounts. Missing amounts count as
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedBalance {
    /// Sum of posted amounts in the account's own currency.
    #[serde(default)]
    pub native_amount: Option<Decimal>,
    /// Sum of posted amounts in the company's reporting currency.
    #[serde(default)]
    pub reporting_amount: Option<Decimal>,
}

impl PostedBalance {
    /// Creates a balance known only in the reporting currency.
    #[must_use]
    pub const fn reporting(amount: Decimal) -> Self {
        Self {
            native_amount: None,
            reporting_amount: Some(amount),
        }
    }

    /// Creates a balance with both the native and the reporting amount.
    #[must_use]
    pub const fn new(native_amount: Option<Decimal>, reporting_amount: Option<Decimal>) -> Self {
        Self {
            native_amount,
            reporting_amount,
        }
    }

    /// Native amount, zero when missing.
    #[must_use]
    pub fn native_or_zero(&self) -> Decimal {
        self.native_amount.unwrap_or_default()
    }

    /// Reporting-currency amount, zero when missing.
    #[must_use]
    pub fn reporting_or_zero(&self) -> Decimal {
        self.reporting_amount.unwrap_or_default()
    }
}

/// Explicit balance record for one account, as stored in a ledger snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// The account ID.
    pub account_id: AccountId,
    /// The posted balance.
    #[serde(flatten)]
    pub balance: PostedBalance,
}
