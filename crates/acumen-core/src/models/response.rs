use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Lifecycle of an assessment response.
///
/// `Pending` is the only mutable state; the rest are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseStatus {
    Pending,
    Completed,
    Abandoned,
    Discarded,
}

impl ResponseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseStatus::Pending => "pending",
            ResponseStatus::Completed => "completed",
            ResponseStatus::Abandoned => "abandoned",
            ResponseStatus::Discarded => "discarded",
        }
    }

    /// Whether the state machine allows moving to `next`.
    ///
    /// Pending → Completed | Abandoned | Discarded; everything else is
    /// terminal.
    pub fn can_transition_to(self, next: ResponseStatus) -> bool {
        matches!(self, ResponseStatus::Pending) && next != ResponseStatus::Pending
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One examinee's pass through an assessment.
///
/// The id is an opaque server-generated token (it doubles as the public
/// response link), not a row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResponse {
    pub id: String,
    pub assessment_id: i64,
    pub examinee_id: Uuid,
    pub status: ResponseStatus,
    /// Authoritative total, computed server-side on completion. The client
    /// never calculates or guesses this.
    pub score: Option<f64>,
    #[serde(default)]
    pub question_responses: Vec<QuestionResponse>,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

/// The answer recorded for a single question. Unanswered questions have
/// no row at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionResponse {
    pub id: Option<i64>,
    pub assessment_response_id: String,
    pub question_id: i64,
    /// The selected choice's value.
    pub numeric_value: f64,
    pub created_at: Option<jiff::Timestamp>,
}
