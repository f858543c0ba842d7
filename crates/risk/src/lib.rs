// In crates/risk/src/lib.rs

pub mod discipline;
pub mod error;
pub mod insights;
pub mod severity;
pub mod types;

// Re-export public types
pub use discipline::{DisciplineBreakdown, DisciplineStatus, assess_discipline};
pub use error::{Error, Result};
pub use insights::{Insight, InsightKind, generate_insights};
pub use severity::{Severity, calculate_severity};
pub use types::RuleSettings;
