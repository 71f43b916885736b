//! Report data types.

use chrono::NaiveDate;
use finlens_shared::types::{AccountId, CompanyId, Currency, format_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{AccountType, DrillDownQuery};

/// Kind of report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Group header carrying the group subtotal.
    SectionHeader,
    /// One account.
    Detail,
}

/// A report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Render order within its side, starting at 1.
    pub sequence: u32,
    /// Header or detail.
    pub kind: LineKind,
    /// Row label.
    pub label: String,
    /// Account type of the row's group.
    pub account_type: AccountType,
    /// Amount in the account's own currency (sign-adjusted).
    pub original_amount: Decimal,
    /// Currency of `original_amount`.
    pub original_currency: Currency,
    /// Amount in the reporting currency (sign-adjusted).
    pub converted_amount: Decimal,
    /// The reporting currency.
    pub reporting_currency: Currency,
    /// False for near-zero amounts.
    pub is_highlighted: bool,
    /// Source account, detail rows only.
    pub account_id: Option<AccountId>,
}

impl LineItem {
    /// Returns true for group headers.
    #[must_use]
    pub fn is_section_header(&self) -> bool {
        self.kind == LineKind::SectionHeader
    }

    /// Converted amount formatted for display, e.g. `1.234,56 €`.
    #[must_use]
    pub fn display_amount(&self) -> String {
        format_money(self.converted_amount, self.reporting_currency)
    }

    /// Original amount formatted for display.
    #[must_use]
    pub fn display_original_amount(&self) -> String {
        format_money(self.original_amount, self.original_currency)
    }

    /// Returns true if the original amount is in a foreign currency.
    #[must_use]
    pub fn is_foreign(&self) -> bool {
        self.original_currency != self.reporting_currency
    }

    /// Query listing the posted lines behind a detail row.
    #[must_use]
    pub fn drill_down(&self) -> Option<DrillDownQuery> {
        match self.kind {
            LineKind::Detail => self.account_id.map(DrillDownQuery::posted),
            LineKind::SectionHeader => None,
        }
    }
}

/// Liquidity KPIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityKpis {
    /// Cash minus short-term debt.
    pub liq1: Decimal,
    /// Cash and receivables minus short-term debt.
    pub liq2: Decimal,
    /// Cash, receivables and other current assets minus short-term debt.
    pub liq3: Decimal,
    /// Sum of asset balances.
    pub total_assets: Decimal,
    /// Sum of liability and equity balances (positive).
    pub total_liabilities: Decimal,
    /// Sum of short-term liability balances (positive).
    pub short_term_debt: Decimal,
}

/// Which of the two row sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSide {
    /// Asset rows, followed by rows outside the taxonomy.
    Assets,
    /// Liability and equity rows.
    Liabilities,
}

/// A header row and the detail rows below it.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    /// The header row.
    pub header: &'a LineItem,
    /// The detail rows.
    pub details: &'a [LineItem],
}

impl Section<'_> {
    /// Sum of the detail rows' converted amounts.
    #[must_use]
    pub fn detail_total(&self) -> Decimal {
        self.details.iter().map(|l| l.converted_amount).sum()
    }
}

/// Liquidity report for one company at one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report name.
    pub name: String,
    /// Company the report covers.
    pub company_id: CompanyId,
    /// Date used for currency conversion.
    pub as_of: NaiveDate,
    /// Currency of all converted amounts.
    pub reporting_currency: Currency,
    /// Asset rows (Aktiva).
    pub assets: Vec<LineItem>,
    /// Liability and equity rows (Passiva).
    pub liabilities: Vec<LineItem>,
    /// KPIs.
    pub kpis: LiquidityKpis,
}

impl Report {
    /// Returns the rows of one side.
    #[must_use]
    pub fn lines(&self, side: ReportSide) -> &[LineItem] {
        match side {
            ReportSide::Assets => &self.assets,
            ReportSide::Liabilities => &self.liabilities,
        }
    }

    /// Splits one side into header/detail groups.
    #[must_use]
    pub fn sections(&self, side: ReportSide) -> Vec<Section<'_>> {
        let lines = self.lines(side);
        let starts: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_section_header())
            .map(|(i, _)| i)
            .collect();

        starts
            .iter()
            .enumerate()
            .map(|(n, &start)| {
                let end = starts.get(n + 1).copied().unwrap_or(lines.len());
                Section {
                    header: &lines[start],
                    details: &lines[start + 1..end],
                }
            })
            .collect()
    }

    /// Returns the KPIs.
    #[must_use]
    pub fn kpis(&self) -> LiquidityKpis {
        self.kpis
    }

    /// Returns the detail rows of both sides.
    pub fn details(&self) -> impl Iterator<Item = &LineItem> {
        self.assets
            .iter()
            .chain(&self.liabilities)
            .filter(|l| !l.is_section_header())
    }
}
