// In app/src/report.rs

use std::fmt::Write;

use risk::{DisciplineBreakdown, InsightKind};
use web_server::types::AnalyzeTradeResponse;

/// Renders a reviewed trade as a plain-text report for the terminal.
pub fn render_report(response: &AnalyzeTradeResponse, discipline: &DisciplineBreakdown) -> String {
    let analysis = &response.analysis;
    let rr_ratio = analysis
        .rr_ratio
        .map(|rr| format!("{rr:.2}"))
        .unwrap_or_else(|| "n/a".to_string());

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "\n--- Trade Autopsy ---");
    let _ = writeln!(
        out,
        "Verdict: {} (severity {})",
        response.severity.verdict(),
        response.severity.tier()
    );
    let _ = writeln!(
        out,
        "  - P&L: {:.2} | Risk: {:.2} ({:.2}%) | R:R: {}",
        analysis.pnl, analysis.risk_amount, analysis.risk_pct, rr_ratio
    );

    let _ = writeln!(out, "\nInsights:");
    for insight in &response.insights {
        let tag = match insight.kind {
            InsightKind::Error => "ERROR",
            InsightKind::Warning => "WARNING",
            InsightKind::Good => "GOOD",
        };
        let _ = writeln!(out, "  [{tag}] {}", insight.message);
    }

    let _ = writeln!(out, "\nDiscipline:");
    for (label, status) in [
        ("Risk Management", discipline.risk_management),
        ("Risk-Reward Planning", discipline.risk_reward_planning),
        ("Stop-Loss Discipline", discipline.stop_loss_discipline),
    ] {
        let _ = writeln!(out, "  {label:<22} {}", status.label());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::{Side, Trade};
    use risk::RuleSettings;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn render(trade: &Trade) -> String {
        let engine = AnalyticsEngine::new();
        let rules = RuleSettings::default();
        let response = AnalyzeTradeResponse::review(&engine, trade, &rules);
        let discipline = risk::assess_discipline(trade, &response.analysis, &rules);
        render_report(&response, &discipline)
    }

    #[test]
    fn disciplined_report() {
        let trade = Trade {
            capital: dec!(10000),
            entry_price: dec!(100),
            exit_price: dec!(110),
            stop_loss: dec!(95),
            quantity: 10,
            direction: Side::Long,
        };

        let report = render(&trade);

        assert!(report.contains("Verdict: DISCIPLINED (severity 1)"));
        assert!(report.contains("P&L: 100.00 | Risk: 50.00 (0.50%) | R:R: 2.00"));
        assert!(report.contains("[GOOD]"));
        assert!(report.contains("Stop-Loss Discipline   GOOD"));
    }

    #[test]
    fn undefined_ratio_and_errors_are_reported() {
        let trade = Trade {
            capital: dec!(1000),
            entry_price: Decimal::ZERO,
            exit_price: dec!(5),
            stop_loss: Decimal::ZERO,
            quantity: 1,
            direction: Side::Long,
        };

        let report = render(&trade);

        assert!(report.contains("Verdict: HIGH RISK (severity 3)"));
        assert!(report.contains("R:R: n/a"));
        assert!(report.contains("[ERROR] Trade has no stop-loss. Risk is undefined."));
        assert!(report.contains("Risk-Reward Planning   WEAK"));
    }
}
