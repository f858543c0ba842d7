// In crates/risk/src/severity.rs

use serde::Serialize;

use crate::insights::{Insight, InsightKind};

/// Coarse classification of a reviewed trade.
///
/// Serialized as its tier number (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Severity {
    /// No rule was broken.
    Disciplined = 1,
    /// Only warnings were raised.
    Questionable = 2,
    /// At least one error was raised.
    HighRisk = 3,
}

impl Severity {
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// The headline shown to the trader.
    pub fn verdict(self) -> &'static str {
        match self {
            Severity::Disciplined => "DISCIPLINED",
            Severity::Questionable => "QUESTIONABLE",
            Severity::HighRisk => "HIGH RISK",
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.tier()
    }
}

/// Reduces a set of insights to a single severity tier.
pub fn calculate_severity(insights: &[Insight]) -> Severity {
    if insights.iter().any(|i| i.kind == InsightKind::Error) {
        return Severity::HighRisk;
    }
    if insights.iter().any(|i| i.kind == InsightKind::Warning) {
        return Severity::Questionable;
    }
    Severity::Disciplined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight(kind: InsightKind) -> Insight {
        Insight::new(kind, "msg")
    }

    #[test]
    fn good_only_is_disciplined() {
        assert_eq!(calculate_severity(&[insight(InsightKind::Good)]), Severity::Disciplined);
        assert_eq!(calculate_severity(&[]), Severity::Disciplined);
    }

    #[test]
    fn warnings_are_questionable() {
        let insights = [insight(InsightKind::Warning), insight(InsightKind::Warning)];
        assert_eq!(calculate_severity(&insights), Severity::Questionable);
    }

    #[test]
    fn any_error_wins_regardless_of_position() {
        let layouts = [
            vec![insight(InsightKind::Error)],
            vec![insight(InsightKind::Warning), insight(InsightKind::Error)],
            vec![insight(InsightKind::Error), insight(InsightKind::Warning)],
            vec![insight(InsightKind::Good), insight(InsightKind::Error)],
        ];
        for insights in layouts {
            assert_eq!(calculate_severity(&insights), Severity::HighRisk);
        }
    }

    #[test]
    fn severity_serializes_as_tier_number() {
        assert_eq!(serde_json::to_value(Severity::Disciplined).unwrap(), serde_json::json!(1));
        assert_eq!(serde_json::to_value(Severity::HighRisk).unwrap(), serde_json::json!(3));
        assert_eq!(Severity::Questionable.verdict(), "QUESTIONABLE");
    }
}
