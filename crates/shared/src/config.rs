//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::CompanyId;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report generation settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Ledger snapshot source (used by the reporter binary).
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report generation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Display name of the report.
    #[serde(default = "default_report_name")]
    pub name: String,
    /// Rows whose absolute converted amount is not above this value render
    /// unhighlighted.
    #[serde(default = "default_highlight_threshold")]
    pub highlight_threshold: Decimal,
}

fn default_report_name() -> String {
    "Mein Finanz-Check".to_string()
}

fn default_highlight_threshold() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name: default_report_name(),
            highlight_threshold: default_highlight_threshold(),
        }
    }
}

/// Ledger snapshot source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotConfig {
    /// Path to a JSON ledger snapshot.
    pub path: Option<String>,
    /// Company to report on; defaults to the first company in the snapshot.
    pub company_id: Option<CompanyId>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the reporter prints a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Plain text table, one line per row.
    Table,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINLENS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
