// In crates/risk/src/types.rs

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The thresholds the discipline rules are evaluated against.
///
/// Loaded once at startup and handed to every evaluation explicitly.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RuleSettings {
    /// Maximum share of capital (in percent) a single trade may risk.
    #[serde(default = "default_max_risk_pct")]
    pub max_risk_pct: f64,
    /// Minimum acceptable risk-reward ratio.
    #[serde(default = "default_min_rr")]
    pub min_rr: f64,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            max_risk_pct: default_max_risk_pct(),
            min_rr: default_min_rr(),
        }
    }
}

impl RuleSettings {
    /// Rejects thresholds that would make the rules meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.max_risk_pct.is_finite() || self.max_risk_pct < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "max_risk_pct must be a non-negative number, got {}",
                self.max_risk_pct
            )));
        }
        if !self.min_rr.is_finite() || self.min_rr < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "min_rr must be a non-negative number, got {}",
                self.min_rr
            )));
        }
        Ok(())
    }
}

// Helper functions for serde defaults.
fn default_max_risk_pct() -> f64 { 1.0 }
fn default_min_rr() -> f64 { 1.5 }
