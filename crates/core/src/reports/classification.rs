//! Account type classification.
//!
//! Every account type maps to a balance sheet side, a liquidity tier, a
//! display priority and a group label:
//!
//! | Type | Side | Tiers | Priority |
//! |---|---|---|---|
//! | cash | asset | 1, 2, 3 | 10 |
//! | receivable | asset | 2, 3 | 20 |
//! | current asset / prepayment | asset | 3 | 30 / 35 |
//! | fixed / non-current asset | asset | - | 40 / 45 |
//! | payable / credit card / current liability | short-term liability | - | 10 / 15 / 20 |
//! | non-current liability / equity / retained earnings | long-term liability | - | 50 / 60 / 70 |
//! | anything else | none | - | 999 |

use serde::{Deserialize, Serialize};

use crate::ledger::AccountType;

/// Balance sheet side of an account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Assets (Aktiva).
    Asset,
    /// Liabilities and equity (Passiva). Stored credit-negative, reported positive.
    Liability,
    /// Not part of the balance sheet taxonomy; excluded from all totals.
    Other,
}

/// Where an account type lands in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Balance sheet side.
    pub side: Side,
    /// Lowest liquidity tier the type counts towards (1 = cash only).
    pub liquidity_tier: Option<u8>,
    /// Counts as short-term debt.
    pub short_term: bool,
    /// Sort priority, ascending.
    pub priority: u16,
    /// Group label.
    pub label: &'static str,
}

impl Classification {
    const fn asset(liquidity_tier: Option<u8>, priority: u16, label: &'static str) -> Self {
        Self {
            side: Side::Asset,
            liquidity_tier,
            short_term: false,
            priority,
            label,
        }
    }

    const fn liability(short_term: bool, priority: u16, label: &'static str) -> Self {
        Self {
            side: Side::Liability,
            liquidity_tier: None,
            short_term,
            priority,
            label,
        }
    }

    /// Returns true if balances of this type count towards liquidity tier `tier`.
    #[must_use]
    pub fn counts_towards_tier(&self, tier: u8) -> bool {
        self.liquidity_tier.is_some_and(|lowest| lowest <= tier)
    }
}

/// Priority of types outside the taxonomy; they sort last.
pub const UNMAPPED_PRIORITY: u16 = 999;

/// Group label of types outside the taxonomy.
pub const UNMAPPED_LABEL: &str = "Sonstiges";

/// Classifies an account type.
#[must_use]
pub const fn classify(account_type: AccountType) -> Classification {
    match account_type {
        AccountType::Cash => Classification::asset(Some(1), 10, "Liquide Mittel"),
        AccountType::Receivable => Classification::asset(Some(2), 20, "Forderungen"),
        AccountType::CurrentAsset => Classification::asset(Some(3), 30, "Umlaufvermögen"),
        AccountType::Prepayment => Classification::asset(Some(3), 35, "Rechnungsabgrenzung"),
        AccountType::FixedAsset => Classification::asset(None, 40, "Sachanlagen"),
        AccountType::NonCurrentAsset => Classification::asset(None, 45, "Langfristiges Vermögen"),
        AccountType::Payable => Classification::liability(true, 10, "Verbindlichkeiten"),
        AccountType::CreditCard => Classification::liability(true, 15, "Kreditkarten"),
        AccountType::CurrentLiability => {
            Classification::liability(true, 20, "Kurzfristige Verbindlichkeiten")
        }
        AccountType::NonCurrentLiability => {
            Classification::liability(false, 50, "Langfristige Verbindlichkeiten")
        }
        AccountType::Equity => Classification::liability(false, 60, "Eigenkapital"),
        AccountType::RetainedEarnings => {
            Classification::liability(false, 70, "Nicht zugeordneter Gewinn")
        }
        AccountType::Unmapped => Classification {
            side: Side::Other,
            liquidity_tier: None,
            short_term: false,
            priority: UNMAPPED_PRIORITY,
            label: UNMAPPED_LABEL,
        },
    }
}
