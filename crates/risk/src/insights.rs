// In crates/risk/src/insights.rs

use analytics::TradeAnalysis;
use core_types::Trade;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::RuleSettings;

pub const NO_STOP_LOSS_MESSAGE: &str = "Trade has no stop-loss. Risk is undefined.";
pub const LOW_RR_MESSAGE: &str = "Low risk–reward ratio. Trade expectancy is weak.";
pub const DISCIPLINED_MESSAGE: &str = "Your trade followed risk and discipline rules.";

/// How serious a single finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Error,
    Warning,
    Good,
}

/// A human-readable finding about a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Evaluates a trade and its metrics against the discipline rules.
///
/// Rules are independent and evaluated in a fixed order, so the returned
/// insights are ordered by rule. A trade breaking no rule gets exactly one
/// `Good` insight.
pub fn generate_insights(
    trade: &Trade,
    analysis: &TradeAnalysis,
    rules: &RuleSettings,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Rule: a stop-loss of zero means no stop was placed.
    if trade.stop_loss.is_zero() {
        insights.push(Insight::new(InsightKind::Error, NO_STOP_LOSS_MESSAGE));
    }

    // Rule: never risk more than the configured share of capital.
    if analysis.risk_pct.to_f64().unwrap_or(0.0) > rules.max_risk_pct {
        insights.push(Insight::new(
            InsightKind::Error,
            format!(
                "Risk per trade exceeded {:?}% of capital.",
                rules.max_risk_pct
            ),
        ));
    }

    // Rule: the reward must justify the risk. An undefined ratio is not judged.
    if let Some(rr_ratio) = analysis.rr_ratio {
        if rr_ratio.to_f64().unwrap_or(0.0) < rules.min_rr {
            insights.push(Insight::new(InsightKind::Warning, LOW_RR_MESSAGE));
        }
    }

    if insights.is_empty() {
        insights.push(Insight::new(InsightKind::Good, DISCIPLINED_MESSAGE));
    }

    tracing::debug!(count = insights.len(), "Generated trade insights.");

    insights
}
