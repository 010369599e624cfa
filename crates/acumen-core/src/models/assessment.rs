use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::id::EntityId;
use crate::ordering::Ordered;

/// How a completed response is scored by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMethod {
    /// Simple true/false; each answer contributes 0 or 1.
    Boolean,
    /// Weighted scores with possible penalties.
    Scored,
    /// User-defined min and max values.
    Custom,
}

impl ScoringMethod {
    /// The implied (min, max) score range, or `None` for `Custom`, which
    /// requires caller-supplied bounds.
    pub fn default_range(self) -> Option<(f64, f64)> {
        match self {
            ScoringMethod::Boolean => Some((0.0, 1.0)),
            ScoringMethod::Scored => Some((-1.0, 1.0)),
            ScoringMethod::Custom => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub scoring_method: ScoringMethod,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

impl Assessment {
    /// Fill in the implied score bounds for the scoring method.
    ///
    /// Boolean and Scored assessments get their default range when neither
    /// bound was supplied. Custom assessments must carry both bounds
    /// explicitly.
    pub fn resolve_bounds(&mut self) -> Result<(), CoreError> {
        match self.scoring_method.default_range() {
            Some((min, max)) => {
                if self.min_value.is_none() && self.max_value.is_none() {
                    self.min_value = Some(min);
                    self.max_value = Some(max);
                }
                Ok(())
            }
            None => {
                if self.min_value.is_none() {
                    Err(CoreError::MissingBound("min_value"))
                } else if self.max_value.is_none() {
                    Err(CoreError::MissingBound("max_value"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    pub id: EntityId,
    pub assessment_id: i64,
    pub text: String,
    pub order: Option<i32>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub created_at: Option<jiff::Timestamp>,
}

impl Question {
    /// A blank question drafted client-side, not yet persisted.
    pub fn draft(assessment_id: i64, order: i32) -> Self {
        Self {
            id: EntityId::fresh(),
            assessment_id,
            text: String::new(),
            order: Some(order),
            choices: Vec::new(),
            created_at: None,
        }
    }
}

impl Ordered for Question {
    fn sort_order(&self) -> i32 {
        self.order.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Choice {
    pub id: EntityId,
    pub question_id: EntityId,
    pub text: String,
    /// Numeric contribution to the score when this choice is selected.
    pub value: f64,
    pub order: Option<i32>,
    pub created_at: Option<jiff::Timestamp>,
}

impl Choice {
    /// A blank choice drafted client-side, not yet persisted.
    pub fn draft(question_id: EntityId, order: i32) -> Self {
        Self {
            id: EntityId::fresh(),
            question_id,
            text: String::new(),
            value: 0.0,
            order: Some(order),
            created_at: None,
        }
    }
}

impl Ordered for Choice {
    fn sort_order(&self) -> i32 {
        self.order.unwrap_or(0)
    }
}
