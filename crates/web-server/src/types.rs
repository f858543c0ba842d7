// In crates/web-server/src/types.rs

use analytics::{AnalyticsEngine, TradeAnalysis};
use core_types::Trade;
use risk::{Insight, RuleSettings, Severity};
use serde::Serialize;

/// The body returned by `POST /analyze-trade`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeTradeResponse {
    /// Always `"success"`; failures use [`ErrorResponse`].
    pub status: &'static str,
    pub analysis: TradeAnalysis,
    pub insights: Vec<Insight>,
    pub severity: Severity,
}

impl AnalyzeTradeResponse {
    /// Runs a trade through the full review pipeline:
    /// metrics, then rule insights, then the severity tier.
    pub fn review(engine: &AnalyticsEngine, trade: &Trade, rules: &RuleSettings) -> Self {
        let analysis = engine.analyze(trade);
        let insights = risk::generate_insights(trade, &analysis, rules);
        let severity = risk::calculate_severity(&insights);

        Self {
            status: "success",
            analysis,
            insights,
            severity,
        }
    }
}

/// The body returned when a request cannot be served.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
