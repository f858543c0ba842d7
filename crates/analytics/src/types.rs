// In crates/analytics/src/types.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The metrics derived from a single trade.
///
/// Every value is rounded to two decimal places. Decimals are serialized as
/// plain JSON numbers so API clients never have to parse strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TradeAnalysis {
    /// Realised profit (positive) or loss (negative) in account currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub pnl: Decimal,
    /// Currency amount lost if the stop-loss had been hit.
    #[serde(with = "rust_decimal::serde::float")]
    pub risk_amount: Decimal,
    /// `risk_amount` as a percentage of capital. Zero when capital is zero.
    #[serde(with = "rust_decimal::serde::float")]
    pub risk_pct: Decimal,
    /// Reward per unit divided by risk per unit.
    /// `None` when the stop-loss sits exactly at the entry price.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub rr_ratio: Option<Decimal>,
}
