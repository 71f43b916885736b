//! Currencies.
//!
//! CRITICAL: Never use floating-point for money calculations. Amounts are
//! `rust_decimal::Decimal` next to a [`Currency`].

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// US Dollar
    Usd,
    /// Swiss Franc
    Chf,
    /// Pound Sterling
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Indonesian Rupiah
    Idr,
    /// Singapore Dollar
    Sgd,
}

impl Currency {
    /// Returns the display symbol used in report labels.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Chf => "CHF",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Idr => "Rp",
            Self::Sgd => "S$",
        }
    }

    /// Returns the number of minor-unit decimal places.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Jpy | Self::Idr => 0,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eur => write!(f, "EUR"),
            Self::Usd => write!(f, "USD"),
            Self::Chf => write!(f, "CHF"),
            Self::Gbp => write!(f, "GBP"),
            Self::Jpy => write!(f, "JPY"),
            Self::Idr => write!(f, "IDR"),
            Self::Sgd => write!(f, "SGD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "CHF" => Ok(Self::Chf),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "IDR" => Ok(Self::Idr),
            "SGD" => Ok(Self::Sgd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
