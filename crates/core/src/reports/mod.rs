//! Balance sheet and liquidity report generation.
//!
//! This module turns posted account balances into a liquidity dashboard:
//! - Classification of account types into balance sheet groups
//! - Sectioned asset and liability line items with group subtotals
//! - Liquidity KPIs (cash, quick and current liquidity)

pub mod classification;
pub mod error;
pub mod service;
pub mod types;


pub use classification::{Classification, Side, classify};
pub use error::ReportError;
pub use service::{BalanceAggregator, ResolvedBalance};
pub use types::*;
