// In crates/analytics/src/engine.rs

use crate::types::TradeAnalysis;
use core_types::{Side, Trade};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Number of decimal places every reported metric is rounded to.
const METRIC_DP: u32 = 2;

/// The engine responsible for calculating performance metrics from a trade.
///
/// Degenerate inputs never produce an error: a zero capital yields a zero risk
/// percentage and a stop-loss at the entry price yields no risk-reward ratio.
/// Arithmetic saturates rather than overflowing.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates P&L, risk and risk-reward metrics for one trade.
    pub fn analyze(&self, trade: &Trade) -> TradeAnalysis {
        let quantity = Decimal::from(trade.quantity);

        // 1. P&L and risk per unit depend on the trade direction.
        let (price_move, risk_per_unit) = match trade.direction {
            Side::Long => (
                trade.exit_price.saturating_sub(trade.entry_price),
                trade.entry_price.saturating_sub(trade.stop_loss),
            ),
            Side::Short => (
                trade.entry_price.saturating_sub(trade.exit_price),
                trade.stop_loss.saturating_sub(trade.entry_price),
            ),
        };
        let pnl = price_move.saturating_mul(quantity);

        // 2. Risk amount and its share of capital.
        let risk_amount = risk_per_unit.saturating_mul(quantity);
        let risk_pct = if trade.capital.is_zero() {
            Decimal::ZERO
        } else {
            saturating_div(risk_amount, trade.capital).saturating_mul(dec!(100))
        };

        // 3. Risk-reward ratio, undefined when the stop sits on the entry.
        let rr_ratio = if trade.stop_loss == trade.entry_price {
            None
        } else {
            let reward = trade.exit_price.saturating_sub(trade.entry_price).abs();
            let risk = trade.entry_price.saturating_sub(trade.stop_loss).abs();
            Some(saturating_div(reward, risk))
        };

        let analysis = TradeAnalysis {
            pnl: pnl.round_dp(METRIC_DP),
            risk_amount: risk_amount.round_dp(METRIC_DP),
            risk_pct: risk_pct.round_dp(METRIC_DP),
            rr_ratio: rr_ratio.map(|ratio| ratio.round_dp(METRIC_DP)),
        };

        tracing::debug!(
            direction = %trade.direction,
            pnl = %analysis.pnl,
            risk_pct = %analysis.risk_pct,
            rr_ratio = ?analysis.rr_ratio,
            "Trade analyzed."
        );

        analysis
    }
}

/// Divides, clamping to the representable range when the quotient overflows.
/// `denominator` must be non-zero.
fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() != denominator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}
