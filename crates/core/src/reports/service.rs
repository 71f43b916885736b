//! Balance aggregation service.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use finlens_shared::config::ReportConfig;
use finlens_shared::types::{CompanyId, Currency, format_money};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use super::classification::{Classification, Side, UNMAPPED_LABEL, classify};
use super::error::ReportError;
use super::types::{LineItem, LineKind, LiquidityKpis, Report};
use crate::currency::CurrencyConverter;
use crate::ledger::{Account, AccountType, LedgerSource, PostedBalance};

/// An account balance in its own and in the reporting currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBalance {
    /// Amount in the account's currency.
    pub original_amount: Decimal,
    /// The account's currency.
    pub original_currency: Currency,
    /// Amount in the reporting currency.
    pub converted_amount: Decimal,
}

impl ResolvedBalance {
    fn domestic(amount: Decimal, currency: Currency) -> Self {
        Self {
            original_amount: amount,
            original_currency: currency,
            converted_amount: amount,
        }
    }

    fn negated(self) -> Self {
        Self {
            original_amount: -self.original_amount,
            original_currency: self.original_currency,
            converted_amount: -self.converted_amount,
        }
    }
}

struct ProcessedAccount {
    account: Account,
    class: Classification,
    balance: ResolvedBalance,
}

/// Running sums; independent of row order.
#[derive(Debug, Default)]
struct Totals {
    tier1: Decimal,
    tier2: Decimal,
    tier3: Decimal,
    total_assets: Decimal,
    total_liabilities: Decimal,
    short_term_debt: Decimal,
}

impl Totals {
    fn add(&mut self, class: &Classification, amount: Decimal) -> Result<(), ReportError> {
        match class.side {
            Side::Asset => {
                accumulate(&mut self.total_assets, amount)?;
                if class.counts_towards_tier(1) {
                    accumulate(&mut self.tier1, amount)?;
                }
                if class.counts_towards_tier(2) {
                    accumulate(&mut self.tier2, amount)?;
                }
                if class.counts_towards_tier(3) {
                    accumulate(&mut self.tier3, amount)?;
                }
            }
            Side::Liability => {
                accumulate(&mut self.total_liabilities, amount)?;
                if class.short_term {
                    accumulate(&mut self.short_term_debt, amount)?;
                }
            }
            Side::Other => {}
        }
        Ok(())
    }

    fn into_kpis(self) -> Result<LiquidityKpis, ReportError> {
        let liquidity =
            |tier: Decimal| tier.checked_sub(self.short_term_debt).ok_or_else(|| out_of_range(tier));

        Ok(LiquidityKpis {
            liq1: liquidity(self.tier1)?,
            liq2: liquidity(self.tier2)?,
            liq3: liquidity(self.tier3)?,
            total_assets: self.total_assets,
            total_liabilities: self.total_liabilities,
            short_term_debt: self.short_term_debt,
        })
    }
}

/// Adds `amount` to `total`, failing instead of overflowing the decimal range.
fn accumulate(total: &mut Decimal, amount: Decimal) -> Result<(), ReportError> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| out_of_range(amount))?;
    Ok(())
}

fn out_of_range(amount: Decimal) -> ReportError {
    ReportError::DataUnavailable(format!("Balance total out of decimal range at {amount}"))
}

/// Rows of one side, numbered as they are pushed.
#[derive(Default)]
struct SideLines {
    lines: Vec<LineItem>,
    current_type: Option<AccountType>,
}

impl SideLines {
    fn push(&mut self, mut line: LineItem) {
        line.sequence = u32::try_from(self.lines.len() + 1).unwrap_or(u32::MAX);
        self.lines.push(line);
    }
}

/// Computes liquidity reports from a ledger.
///
/// Each run reads the company's accounts and posted balances, converts
/// foreign-currency balances into the reporting currency, and returns a
/// fresh [`Report`]. Nothing is cached between runs, so two runs over the
/// same ledger data produce equal reports.
pub struct BalanceAggregator<'a, L, C> {
    ledger: &'a L,
    converter: &'a C,
    config: ReportConfig,
}

impl<'a, L, C> BalanceAggregator<'a, L, C>
where
    L: LedgerSource,
    C: CurrencyConverter,
{
    /// Creates an aggregator with the default report settings.
    #[must_use]
    pub fn new(ledger: &'a L, converter: &'a C) -> Self {
        Self {
            ledger,
            converter,
            config: ReportConfig::default(),
        }
    }

    /// Replaces the report settings.
    #[must_use]
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Computes the report, converting at today's rates.
    pub fn compute_report(&self, company_id: CompanyId) -> Result<Report, ReportError> {
        self.compute_report_as_of(company_id, Utc::now().date_naive())
    }

    /// Computes the report, converting at the rates effective on `as_of`.
    ///
    /// 1. Reads the company's non-deprecated accounts
    /// 2. Resolves each balance in the reporting currency
    /// 3. Flips liability balances to positive
    /// 4. Accumulates group subtotals, tier sums and side totals
    /// 5. Sorts by (priority, code) and emits header and detail rows per side
    ///
    /// # Errors
    ///
    /// Returns `ReportError::DataUnavailable` if the ledger or the converter
    /// cannot be queried, or if a total leaves the `Decimal` range. No
    /// partial report is returned.
    #[instrument(skip(self), fields(report = %self.config.name))]
    pub fn compute_report_as_of(
        &self,
        company_id: CompanyId,
        as_of: NaiveDate,
    ) -> Result<Report, ReportError> {
        let reporting_currency = self.ledger.reporting_currency(company_id)?;
        let accounts = self.ledger.accounts(company_id)?;

        let mut rows = Vec::with_capacity(accounts.len());
        let mut group_totals: HashMap<AccountType, Decimal> = HashMap::new();
        let mut totals = Totals::default();

        for account in accounts {
            if account.deprecated || account.company_id != company_id {
                continue;
            }

            let class = classify(account.account_type);
            if class.side == Side::Other {
                warn!(code = %account.code, "Account type outside the taxonomy, listed under {UNMAPPED_LABEL}");
            }

            let posted = self.ledger.posted_balance(account.id)?;
            let mut balance =
                self.resolve_balance(&account, &posted, reporting_currency, company_id, as_of)?;
            if class.side == Side::Liability {
                balance = balance.negated();
            }
            debug!(
                code = %account.code,
                original = %balance.original_amount,
                converted = %balance.converted_amount,
                "Account balance resolved"
            );

            accumulate(
                group_totals.entry(account.account_type).or_default(),
                balance.converted_amount,
            )?;
            totals.add(&class, balance.converted_amount)?;
            rows.push(ProcessedAccount {
                account,
                class,
                balance,
            });
        }

        rows.sort_by(|a, b| {
            a.class
                .priority
                .cmp(&b.class.priority)
                .then_with(|| a.account.code.cmp(&b.account.code))
        });

        let kpis = totals.into_kpis()?;
        let (assets, liabilities) = self.build_lines(&rows, &group_totals, reporting_currency);

        info!(
            accounts = rows.len(),
            liq1 = %kpis.liq1,
            liq2 = %kpis.liq2,
            liq3 = %kpis.liq3,
            total_assets = %kpis.total_assets,
            total_liabilities = %kpis.total_liabilities,
            "Liquidity report computed"
        );

        Ok(Report {
            name: self.config.name.clone(),
            company_id,
            as_of,
            reporting_currency,
            assets,
            liabilities,
            kpis,
        })
    }

    /// Resolves an account's posted balance in both currencies.
    ///
    /// Domestic accounts use the reporting-currency balance as is. Foreign
    /// accounts convert their native balance; when that yields nothing (no
    /// native amount, no rate), the reporting-currency balance the ledger
    /// reports is used instead and the original amount is estimated by
    /// converting it back.
    pub fn resolve_balance(
        &self,
        account: &Account,
        posted: &PostedBalance,
        reporting_currency: Currency,
        company_id: CompanyId,
        as_of: NaiveDate,
    ) -> Result<ResolvedBalance, ReportError> {
        let account_currency = match account.currency {
            Some(currency) if account.is_foreign(reporting_currency) => currency,
            _ => {
                return Ok(ResolvedBalance::domestic(
                    posted.reporting_or_zero(),
                    reporting_currency,
                ));
            }
        };

        let native = posted.native_or_zero();
        let converted = if native.is_zero() {
            Decimal::ZERO
        } else {
            let converted = self.converter.convert(
                native,
                account_currency,
                reporting_currency,
                company_id,
                as_of,
            )?;
            if converted.is_none() {
                warn!(
                    code = %account.code,
                    from = %account_currency,
                    to = %reporting_currency,
                    "No exchange rate, using the ledger's reporting-currency balance"
                );
            }
            converted.unwrap_or_default()
        };

        if !converted.is_zero() {
            return Ok(ResolvedBalance {
                original_amount: native,
                original_currency: account_currency,
                converted_amount: converted,
            });
        }

        let converted = posted.reporting_or_zero();
        let original = if !native.is_zero() || converted.is_zero() {
            native
        } else {
            self.converter
                .convert(
                    converted,
                    reporting_currency,
                    account_currency,
                    company_id,
                    as_of,
                )?
                .unwrap_or_default()
        };

        debug!(
            code = %account.code,
            %converted,
            estimated_original = %original,
            "Foreign balance resolved from reporting-currency amount"
        );

        Ok(ResolvedBalance {
            original_amount: original,
            original_currency: account_currency,
            converted_amount: converted,
        })
    }

    fn build_lines(
        &self,
        rows: &[ProcessedAccount],
        group_totals: &HashMap<AccountType, Decimal>,
        reporting_currency: Currency,
    ) -> (Vec<LineItem>, Vec<LineItem>) {
        let mut assets = SideLines::default();
        let mut liabilities = SideLines::default();

        for row in rows {
            let side = match row.class.side {
                Side::Liability => &mut liabilities,
                Side::Asset | Side::Other => &mut assets,
            };

            let account_type = row.account.account_type;
            if side.current_type != Some(account_type) {
                let total = group_totals.get(&account_type).copied().unwrap_or_default();
                side.push(self.header_line(&row.class, account_type, total, reporting_currency));
                side.current_type = Some(account_type);
            }

            side.push(self.detail_line(row, reporting_currency));
        }

        (assets.lines, liabilities.lines)
    }

    fn header_line(
        &self,
        class: &Classification,
        account_type: AccountType,
        total: Decimal,
        reporting_currency: Currency,
    ) -> LineItem {
        LineItem {
            sequence: 0,
            kind: LineKind::SectionHeader,
            label: format!(
                "{}  >>>  {}",
                class.label,
                format_money(total, reporting_currency)
            ),
            account_type,
            original_amount: total,
            original_currency: reporting_currency,
            converted_amount: total,
            reporting_currency,
            is_highlighted: self.is_highlighted(total),
            account_id: None,
        }
    }

    fn detail_line(&self, row: &ProcessedAccount, reporting_currency: Currency) -> LineItem {
        LineItem {
            sequence: 0,
            kind: LineKind::Detail,
            label: format!("{} {}", row.account.code, row.account.name),
            account_type: row.account.account_type,
            original_amount: row.balance.original_amount,
            original_currency: row.balance.original_currency,
            converted_amount: row.balance.converted_amount,
            reporting_currency,
            is_highlighted: self.is_highlighted(row.balance.converted_amount),
            account_id: Some(row.account.id),
        }
    }

    fn is_highlighted(&self, amount: Decimal) -> bool {
        amount.abs() > self.config.highlight_threshold
    }
}
