use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A scoring band with a human-readable interpretation.
///
/// A missing `min_value` means "no lower bound" (−∞); a missing
/// `max_value` means "no upper bound" (+∞). Bands for one assessment may
/// overlap or leave gaps — the client does not validate that; matching is
/// first-wins in server list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Diagnostic {
    pub id: Option<i64>,
    pub assessment_id: Option<i64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub description: String,
}

impl Diagnostic {
    /// Whether `score` falls inside this band. Both bounds are inclusive.
    pub fn contains(&self, score: f64) -> bool {
        self.min_value.is_none_or(|min| score >= min)
            && self.max_value.is_none_or(|max| score <= max)
    }
}
