//! In-memory ledger backed by a snapshot.
//!
//! Used by the reporter binary (snapshots exported from the host ledger as
//! JSON) and by tests.

use std::collections::HashMap;

use finlens_shared::types::{AccountId, CompanyId, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::balance::{BalanceRecord, PostedBalance};
use super::entry::{DrillDownQuery, JournalLine};
use super::error::LedgerError;
use super::source::LedgerSource;

/// A company (tenant) and its reporting currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Company ID.
    pub id: CompanyId,
    /// Company name.
    pub name: String,
    /// Reporting currency.
    pub currency: Currency,
}

/// Serializable ledger contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Companies.
    #[serde(default)]
    pub companies: Vec<Company>,
    /// Accounts of all companies, including deprecated ones.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Explicit balances. Accounts without a record are balanced from their
    /// posted journal lines.
    #[serde(default)]
    pub balances: Vec<BalanceRecord>,
    /// Journal lines.
    #[serde(default)]
    pub entries: Vec<JournalLine>,
}

/// A [`LedgerSource`] over a [`LedgerSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    companies: Vec<Company>,
    accounts: Vec<Account>,
    balances: HashMap<AccountId, PostedBalance>,
    entries: Vec<JournalLine>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        let balances = snapshot
            .balances
            .into_iter()
            .map(|record| (record.account_id, record.balance))
            .collect();

        Self {
            companies: snapshot.companies,
            accounts: snapshot.accounts,
            balances,
            entries: snapshot.entries,
        }
    }

    /// Parses a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::from_snapshot)
    }

    /// Adds a company.
    pub fn add_company(&mut self, company: Company) {
        self.companies.push(company);
    }

    /// Adds an account with an explicit posted balance.
    pub fn add_account(&mut self, account: Account, balance: PostedBalance) {
        self.balances.insert(account.id, balance);
        self.accounts.push(account);
    }

    /// Adds a journal line.
    pub fn add_entry(&mut self, line: JournalLine) {
        self.entries.push(line);
    }

    /// Returns the companies in insertion order.
    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn company(&self, company_id: CompanyId) -> Result<&Company, LedgerError> {
        self.companies
            .iter()
            .find(|c| c.id == company_id)
            .ok_or(LedgerError::CompanyNotFound(company_id))
    }

    /// Sums the posted lines of an account. Amounts stay `None` when no line
    /// carries them.
    fn balance_from_lines(&self, account_id: AccountId) -> PostedBalance {
        let query = DrillDownQuery::posted(account_id);
        let mut balance = PostedBalance::default();

        for line in self.entries.iter().filter(|l| query.matches(l)) {
            *balance.reporting_amount.get_or_insert(Decimal::ZERO) += line.balance;
            if let Some(amount) = line.amount_currency {
                *balance.native_amount.get_or_insert(Decimal::ZERO) += amount;
            }
        }

        balance
    }
}

impl LedgerSource for InMemoryLedger {
    fn reporting_currency(&self, company_id: CompanyId) -> Result<Currency, LedgerError> {
        self.company(company_id).map(|c| c.currency)
    }

    fn accounts(&self, company_id: CompanyId) -> Result<Vec<Account>, LedgerError> {
        self.company(company_id)?;

        Ok(self
            .accounts
            .iter()
            .filter(|a| a.company_id == company_id && !a.deprecated)
            .cloned()
            .collect())
    }

    fn posted_balance(&self, account_id: AccountId) -> Result<PostedBalance, LedgerError> {
        if !self.accounts.iter().any(|a| a.id == account_id) {
            return Err(LedgerError::AccountNotFound(account_id));
        }

        Ok(self
            .balances
            .get(&account_id)
            .copied()
            .unwrap_or_else(|| self.balance_from_lines(account_id)))
    }

    fn posted_entries(&self, query: &DrillDownQuery) -> Result<Vec<JournalLine>, LedgerError> {
        if !self.accounts.iter().any(|a| a.id == query.account_id) {
            return Err(LedgerError::AccountNotFound(query.account_id));
        }

        let mut lines: Vec<JournalLine> = self
            .entries
            .iter()
            .filter(|l| query.matches(l))
            .cloned()
            .collect();
        lines.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.reference.cmp(&b.reference)));
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{AccountType, EntryState};
    use chrono::NaiveDate;
    use finlens_shared::types::EntryId;
    use rust_decimal_macros::dec;

    fn company() -> Company {
        Company {
            id: CompanyId::new(),
            name: "Muster GmbH".into(),
            currency: Currency::Eur,
        }
    }

    fn account(company_id: CompanyId, code: &str, account_type: AccountType) -> Account {
        Account {
            id: AccountId::new(),
            company_id,
            code: code.into(),
            name: format!("Konto {code}"),
            account_type,
            currency: None,
            deprecated: false,
        }
    }

    fn line(account_id: AccountId, day: u32, balance: Decimal, state: EntryState) -> JournalLine {
        JournalLine {
            id: EntryId::new(),
            account_id,
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            reference: format!("MISC/2026/{day:04}"),
            label: String::new(),
            balance,
            amount_currency: None,
            state,
        }
    }

    #[test]
    fn test_accounts_skip_deprecated_and_other_companies() {
        let ours = company();
        let theirs = company();
        let mut ledger = InMemoryLedger::new();
        ledger.add_company(ours.clone());
        ledger.add_company(theirs.clone());

        let mut old = account(ours.id, "1001", AccountType::Cash);
        old.deprecated = true;
        ledger.add_account(account(ours.id, "1000", AccountType::Cash), PostedBalance::default());
        ledger.add_account(old, PostedBalance::default());
        ledger.add_account(account(theirs.id, "1000", AccountType::Cash), PostedBalance::default());

        let accounts = ledger.accounts(ours.id).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].code, "1000");
    }

    #[test]
    fn test_unknown_company() {
        let ledger = InMemoryLedger::new();
        let missing = CompanyId::new();
        assert!(matches!(
            ledger.accounts(missing),
            Err(LedgerError::CompanyNotFound(id)) if id == missing
        ));
        assert!(ledger.reporting_currency(missing).is_err());
    }

    #[test]
    fn test_balance_from_posted_lines_only() {
        let c = company();
        let cash = account(c.id, "1000", AccountType::Cash);
        let mut ledger = InMemoryLedger::new();
        ledger.add_company(c);
        ledger.accounts.push(cash.clone());
        ledger.add_entry(line(cash.id, 2, dec!(300), EntryState::Posted));
        ledger.add_entry(line(cash.id, 3, dec!(200), EntryState::Posted));
        ledger.add_entry(line(cash.id, 4, dec!(999), EntryState::Draft));

        let balance = ledger.posted_balance(cash.id).unwrap();
        assert_eq!(balance.reporting_amount, Some(dec!(500)));
        assert_eq!(balance.native_amount, None);
    }

    #[test]
    fn test_account_without_lines_has_no_amounts() {
        let c = company();
        let cash = account(c.id, "1000", AccountType::Cash);
        let mut ledger = InMemoryLedger::new();
        ledger.add_company(c);
        ledger.accounts.push(cash.clone());

        assert_eq!(ledger.posted_balance(cash.id).unwrap(), PostedBalance::default());
    }

    #[test]
    fn test_posted_entries_sorted_by_date() {
        let c = company();
        let cash = account(c.id, "1000", AccountType::Cash);
        let mut ledger = InMemoryLedger::new();
        ledger.add_company(c);
        ledger.accounts.push(cash.clone());
        ledger.add_entry(line(cash.id, 9, dec!(1), EntryState::Posted));
        ledger.add_entry(line(cash.id, 5, dec!(2), EntryState::Draft));
        ledger.add_entry(line(cash.id, 1, dec!(3), EntryState::Posted));

        let lines = ledger.posted_entries(&DrillDownQuery::posted(cash.id)).unwrap();
        let days: Vec<_> = lines.iter().map(|l| l.balance).collect();
        assert_eq!(days, vec![dec!(3), dec!(1)]);
    }

    #[test]
    fn test_from_json() {
        let company_id = CompanyId::new();
        let account_id = AccountId::new();
        let json = format!(
            r#"{{
                "companies": [{{"id": "{company_id}", "name": "Muster GmbH", "currency": "EUR"}}],
                "accounts": [{{
                    "id": "{account_id}", "company_id": "{company_id}",
                    "code": "1200", "name": "Bank USD",
                    "account_type": "asset_cash", "currency": "USD"
                }}],
                "balances": [{{"account_id": "{account_id}", "native_amount": "100"}}]
            }}"#
        );

        let ledger = InMemoryLedger::from_json(&json).unwrap();
        assert_eq!(ledger.reporting_currency(company_id).unwrap(), Currency::Eur);
        let accounts = ledger.accounts(company_id).unwrap();
        assert_eq!(accounts[0].currency, Some(Currency::Usd));
        assert_eq!(
            ledger.posted_balance(account_id).unwrap(),
            PostedBalance::new(Some(dec!(100)), None)
        );
    }
}
