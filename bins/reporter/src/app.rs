//! Snapshot loading and report output.

use std::fs;

use finlens_core::currency::{ExchangeRate, RateTable};
use finlens_core::ledger::{InMemoryLedger, LedgerSnapshot};
use finlens_core::reports::{BalanceAggregator, Report};
use finlens_shared::config::OutputFormat;
use finlens_shared::types::CompanyId;
use finlens_shared::{AppConfig, AppError, AppResult};
use serde::Deserialize;
use tracing::info;

use crate::render;

/// Ledger snapshot plus the exchange rates to convert with.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(flatten)]
    ledger: LedgerSnapshot,
    #[serde(default)]
    rates: Vec<ExchangeRate>,
}

/// A parsed snapshot, ready to report on.
pub struct Snapshot {
    pub ledger: InMemoryLedger,
    pub rates: RateTable,
}

impl Snapshot {
    /// Parses a JSON snapshot.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let file: SnapshotFile = serde_json::from_str(raw)
            .map_err(|e| AppError::Validation(format!("Invalid snapshot: {e}")))?;

        Ok(Self {
            ledger: InMemoryLedger::from_snapshot(file.ledger),
            rates: RateTable::new(file.rates),
        })
    }

    /// Reads and parses a snapshot file.
    pub fn load(path: &str) -> AppResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::NotFound(format!("Snapshot {path}: {e}")))?;
        Self::parse(&raw)
    }

    /// The configured company, or the snapshot's first one.
    pub fn company_id(&self, configured: Option<CompanyId>) -> AppResult<CompanyId> {
        match configured {
            Some(id) => Ok(id),
            None => self
                .ledger
                .companies()
                .first()
                .map(|c| c.id)
                .ok_or_else(|| AppError::NotFound("Snapshot contains no company".into())),
        }
    }

    /// Computes the report for a company.
    pub fn report(&self, config: &AppConfig, company_id: CompanyId) -> AppResult<Report> {
        Ok(BalanceAggregator::new(&self.ledger, &self.rates)
            .with_config(config.report.clone())
            .compute_report(company_id)?)
    }
}

/// Formats a report as configured.
pub fn format_report(report: &Report, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| AppError::Internal(format!("Failed to serialize report: {e}"))),
        OutputFormat::Table => Ok(render::table(report)),
    }
}

/// Loads the snapshot, computes the report and returns it formatted.
pub fn run(config: &AppConfig, path: Option<String>) -> AppResult<String> {
    let path = path.or_else(|| config.snapshot.path.clone()).ok_or_else(|| {
        AppError::Configuration(
            "No snapshot given: pass a path or set FINLENS__SNAPSHOT__PATH".into(),
        )
    })?;

    let snapshot = Snapshot::load(&path)?;
    let company_id = snapshot.company_id(config.snapshot.company_id)?;
    info!(%path, %company_id, "Snapshot loaded");

    let report = snapshot.report(config, company_id)?;
    format_report(&report, config.output.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SNAPSHOT: &str = r#"{
        "companies": [
            {"id": "0190a000-0000-7000-8000-000000000001", "name": "Muster GmbH", "currency": "EUR"}
        ],
        "accounts": [
            {
                "id": "0190a000-0000-7000-8000-000000000101",
                "company_id": "0190a000-0000-7000-8000-000000000001",
                "code": "1200", "name": "Bank USD",
                "account_type": "asset_cash", "currency": "USD"
            }
        ],
        "balances": [
            {"account_id": "0190a000-0000-7000-8000-000000000101", "native_amount": "100"}
        ],
        "rates": [
            {"from_currency": "USD", "to_currency": "EUR", "rate": "0.9", "effective_date": "2020-01-01"}
        ]
    }"#;

    #[test]
    fn test_report_from_snapshot() {
        let snapshot = Snapshot::parse(SNAPSHOT).unwrap();
        let company_id = snapshot.company_id(None).unwrap();
        let report = snapshot.report(&AppConfig::default(), company_id).unwrap();

        assert_eq!(report.kpis.total_assets, dec!(90));
        let json = format_report(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"name\": \"Mein Finanz-Check\""));
    }

    #[test]
    fn test_invalid_snapshot_is_validation_error() {
        let err = Snapshot::parse("{\"companies\": 3}").err().unwrap();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Snapshot::load("does/not/exist.json").err().unwrap();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_empty_snapshot_has_no_company() {
        let snapshot = Snapshot::parse("{}").unwrap();
        let err = snapshot.company_id(None).err().unwrap();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_unknown_company_is_external_service_error() {
        let snapshot = Snapshot::parse(SNAPSHOT).unwrap();
        let err = snapshot
            .report(&AppConfig::default(), CompanyId::new())
            .err()
            .unwrap();
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");
    }

    #[test]
    fn test_run_without_path_is_configuration_error() {
        let err = run(&AppConfig::default(), None).err().unwrap();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
