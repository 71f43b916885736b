//! Finlens Reporter
//!
//! Reads a JSON ledger snapshot, computes the liquidity report for one
//! company and prints it.
//!
//! ```text
//! finlens-reporter [SNAPSHOT]
//! ```
//!
//! The snapshot path falls back to `FINLENS__SNAPSHOT__PATH`.

mod app;
mod render;

use finlens_shared::{AppConfig, AppError};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays a clean report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = AppConfig::load()
        .map_err(AppError::from)
        .and_then(|config| app::run(&config, std::env::args().nth(1)))
        .inspect_err(|err| error!(code = err.error_code(), "{err}"))?;
    println!("{output}");

    Ok(())
}
