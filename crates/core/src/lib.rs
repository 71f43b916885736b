//! Core business logic for Finlens.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Ledger data and exchange rates come in through the [`ledger::LedgerSource`] and
//! [`currency::CurrencyConverter`] traits; the host environment supplies them.
//!
//! # Modules
//!
//! - `ledger` - Accounts, posted balances and the ledger source contract
//! - `currency` - Exchange rates and currency conversion
//! - `reports` - Balance aggregation, classification and liquidity KPIs

pub mod currency;
pub mod ledger;
pub mod reports;
