//! Shared types, errors, and configuration for Finlens.
//!
//! This crate provides common types used across all other crates:
//! - Currencies and their display symbols
//! - German-locale amount formatting for report labels
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
