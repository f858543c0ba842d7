// In crates/risk/src/discipline.rs

use analytics::TradeAnalysis;
use core_types::Trade;
use num_traits::ToPrimitive;
use serde::Serialize;

use crate::types::RuleSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisciplineStatus {
    Good,
    Warning,
    Bad,
}

impl DisciplineStatus {
    pub fn label(self) -> &'static str {
        match self {
            DisciplineStatus::Good => "GOOD",
            DisciplineStatus::Warning => "WEAK",
            DisciplineStatus::Bad => "BROKEN",
        }
    }
}

/// Per-rule scorecard for a single trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisciplineBreakdown {
    pub risk_management: DisciplineStatus,
    pub risk_reward_planning: DisciplineStatus,
    pub stop_loss_discipline: DisciplineStatus,
}

pub fn assess_discipline(
    trade: &Trade,
    analysis: &TradeAnalysis,
    rules: &RuleSettings,
) -> DisciplineBreakdown {
    let risk_management = if analysis.risk_pct.to_f64().unwrap_or(0.0) <= rules.max_risk_pct {
        DisciplineStatus::Good
    } else {
        DisciplineStatus::Bad
    };

    // An undefined ratio counts as unplanned reward.
    let risk_reward_planning = match analysis.rr_ratio.and_then(|rr| rr.to_f64()) {
        Some(rr) if rr >= rules.min_rr => DisciplineStatus::Good,
        _ => DisciplineStatus::Warning,
    };

    let stop_loss_discipline = if trade.stop_loss.is_sign_positive() && !trade.stop_loss.is_zero() {
        DisciplineStatus::Good
    } else {
        DisciplineStatus::Bad
    };

    DisciplineBreakdown {
        risk_management,
        risk_reward_planning,
        stop_loss_discipline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::Side;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn assess(trade: &Trade) -> DisciplineBreakdown {
        let analysis = AnalyticsEngine::new().analyze(trade);
        assess_discipline(trade, &analysis, &RuleSettings::default())
    }

    #[test]
    fn disciplined_trade_scores_good_everywhere() {
        let trade = Trade {
            capital: dec!(100000),
            entry_price: dec!(500),
            exit_price: dec!(540),
            stop_loss: dec!(490),
            quantity: 100,
            direction: Side::Long,
        };

        let breakdown = assess(&trade);

        assert_eq!(breakdown.risk_management, DisciplineStatus::Good);
        assert_eq!(breakdown.risk_reward_planning, DisciplineStatus::Good);
        assert_eq!(breakdown.stop_loss_discipline, DisciplineStatus::Good);
    }

    #[test]
    fn missing_stop_breaks_every_rule() {
        let trade = Trade {
            capital: dec!(10000),
            entry_price: dec!(100),
            exit_price: dec!(110),
            stop_loss: Decimal::ZERO,
            quantity: 10,
            direction: Side::Long,
        };

        let breakdown = assess(&trade);

        assert_eq!(breakdown.risk_management, DisciplineStatus::Bad);
        assert_eq!(breakdown.risk_reward_planning, DisciplineStatus::Warning);
        assert_eq!(breakdown.stop_loss_discipline, DisciplineStatus::Bad);
        assert_eq!(breakdown.stop_loss_discipline.label(), "BROKEN");
    }

    #[test]
    fn undefined_ratio_is_a_planning_warning() {
        let trade = Trade {
            capital: dec!(10000),
            entry_price: dec!(100),
            exit_price: dec!(120),
            stop_loss: dec!(100),
            quantity: 10,
            direction: Side::Long,
        };

        assert_eq!(assess(&trade).risk_reward_planning, DisciplineStatus::Warning);
    }
}
