use serde::{Deserialize, Serialize};

use crate::models::Priority;

/// Semantic icon category the views render a status as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IconKind {
    Success,
    Warning,
    Danger,
    Neutral,
}

/// Severity bucket for a competency gap value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GapSeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// Band for a 0-100 progress value, matching the 80/60 display thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProgressBand {
    OnTrack,
    AtRisk,
    Behind,
}

/// Priority filter for approval lists. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Case-insensitive parse of the filter buttons: "all", "high",
    /// "medium", "low".
    pub fn parse(value: &str) -> Option<PriorityFilter> {
        if value.eq_ignore_ascii_case("all") {
            return Some(PriorityFilter::All);
        }
        Priority::from_label(value).map(PriorityFilter::Only)
    }
}
