//! Chart of accounts entries.

use std::convert::Infallible;

use finlens_shared::types::{AccountId, CompanyId, Currency};
use serde::{Deserialize, Serialize};

/// Account type from the fixed balance sheet taxonomy.
///
/// Wire names follow the host ledger's account types. Any name outside the
/// taxonomy deserializes to [`AccountType::Unmapped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Bank and cash accounts.
    #[serde(rename = "asset_cash")]
    Cash,
    /// Trade receivables.
    #[serde(rename = "asset_receivable")]
    Receivable,
    /// Other current assets.
    #[serde(rename = "asset_current")]
    CurrentAsset,
    /// Prepaid expenses.
    #[serde(rename = "asset_prepayments")]
    Prepayment,
    /// Fixed assets.
    #[serde(rename = "asset_fixed")]
    FixedAsset,
    /// Other non-current assets.
    #[serde(rename = "asset_non_current")]
    NonCurrentAsset,
    /// Trade payables.
    #[serde(rename = "liability_payable")]
    Payable,
    /// Credit card balances.
    #[serde(rename = "liability_credit_card")]
    CreditCard,
    /// Other current liabilities.
    #[serde(rename = "liability_current")]
    CurrentLiability,
    /// Non-current liabilities.
    #[serde(rename = "liability_non_current")]
    NonCurrentLiability,
    /// Equity.
    #[serde(rename = "equity")]
    Equity,
    /// Current year earnings not yet allocated.
    #[serde(rename = "equity_unaffected")]
    RetainedEarnings,
    /// Anything outside the taxonomy (income, expense, off-balance, ...).
    #[serde(rename = "other")]
    #[serde(other)]
    Unmapped,
}

impl AccountType {
    /// All account types, in taxonomy order.
    pub const ALL: [Self; 13] = [
        Self::Cash,
        Self::Receivable,
        Self::CurrentAsset,
        Self::Prepayment,
        Self::FixedAsset,
        Self::NonCurrentAsset,
        Self::Payable,
        Self::CreditCard,
        Self::CurrentLiability,
        Self::NonCurrentLiability,
        Self::Equity,
        Self::RetainedEarnings,
        Self::Unmapped,
    ];

    /// Returns the wire name of this account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "asset_cash",
            Self::Receivable => "asset_receivable",
            Self::CurrentAsset => "asset_current",
            Self::Prepayment => "asset_prepayments",
            Self::FixedAsset => "asset_fixed",
            Self::NonCurrentAsset => "asset_non_current",
            Self::Payable => "liability_payable",
            Self::CreditCard => "liability_credit_card",
            Self::CurrentLiability => "liability_current",
            Self::NonCurrentLiability => "liability_non_current",
            Self::Equity => "equity",
            Self::RetainedEarnings => "equity_unaffected",
            Self::Unmapped => "other",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .unwrap_or(Self::Unmapped))
    }
}

/// A chart of accounts entry as supplied by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Account code (e.g. "1000").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Account currency; `None` means the reporting currency.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Deprecated accounts are never reported.
    #[serde(default)]
    pub deprecated: bool,
}

impl Account {
    /// Returns true if the account keeps its books in a currency other than
    /// `reporting_currency`.
    #[must_use]
    pub fn is_foreign(&self, reporting_currency: Currency) -> bool {
        self.currency.is_some_and(|c| c != reporting_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_account_type_wire_names_round_trip() {
        for account_type in AccountType::ALL {
            assert_eq!(AccountType::from_str(account_type.as_str()), Ok(account_type));
        }
    }

    #[test]
    fn test_unknown_account_type_is_unmapped() {
        assert_eq!(AccountType::from_str("income"), Ok(AccountType::Unmapped));
        let parsed: AccountType = serde_json::from_str("\"off_balance\"").unwrap();
        assert_eq!(parsed, AccountType::Unmapped);
    }

    #[test]
    fn test_is_foreign() {
        let mut account = Account {
            id: AccountId::new(),
            company_id: CompanyId::new(),
            code: "1200".into(),
            name: "Bank USD".into(),
            account_type: AccountType::Cash,
            currency: Some(Currency::Usd),
            deprecated: false,
        };
        assert!(account.is_foreign(Currency::Eur));
        assert!(!account.is_foreign(Currency::Usd));

        account.currency = None;
        assert!(!account.is_foreign(Currency::Eur));
    }
}
