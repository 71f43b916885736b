//! Common types used across the application.

pub mod format;
pub mod id;
pub mod money;

pub use format::{format_amount, format_money};
pub use id::*;
pub use money::Currency;
