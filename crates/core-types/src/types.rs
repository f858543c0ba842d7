// In crates/core-types/src/types.rs

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Error;

/// The direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Long => "long",
            Side::Short => "short",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Side::Long),
            "short" => Ok(Side::Short),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// A single completed trade as submitted for review.
///
/// Nothing beyond the type constraints is validated here. Degenerate inputs such
/// as a zero capital or a stop-loss placed at the entry price are accepted and
/// handled downstream by the analytics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Account capital the trade was taken with.
    #[serde(with = "rust_decimal::serde::float")]
    pub capital: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub entry_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub exit_price: Decimal,
    /// Stop-loss price. A value of zero means no stop was placed.
    #[serde(with = "rust_decimal::serde::float")]
    pub stop_loss: Decimal,
    pub quantity: u64,
    pub direction: Side,
}
