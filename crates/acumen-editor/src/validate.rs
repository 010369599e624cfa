use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use acumen_core::id::EntityId;
use acumen_core::models::Question;
use acumen_core::ordering::Ordered;

/// A single reason the edited tree cannot be saved.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct ValidationIssue {
    pub entity_id: EntityId,
    pub field: String,
    pub message: String,
}

/// Check one question and its choices.
///
/// A question needs non-empty text; every choice needs non-empty text and
/// a finite numeric value (NaN and ±∞ are rejected, 0 is a valid score
/// contribution). An empty vec means the question is saveable.
pub fn validate_question(question: &Question) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let position = question.sort_order();

    if question.text.trim().is_empty() {
        issues.push(ValidationIssue {
            entity_id: question.id,
            field: "text".to_string(),
            message: format!("question {position}: text is required"),
        });
    }

    for choice in &question.choices {
        let choice_position = choice.sort_order();
        if choice.text.trim().is_empty() {
            issues.push(ValidationIssue {
                entity_id: choice.id,
                field: "text".to_string(),
                message: format!(
                    "question {position}, choice {choice_position}: text is required"
                ),
            });
        }
        if !choice.value.is_finite() {
            issues.push(ValidationIssue {
                entity_id: choice.id,
                field: "value".to_string(),
                message: format!(
                    "question {position}, choice {choice_position}: value must be a finite number"
                ),
            });
        }
    }

    issues
}

/// Check the whole edited tree before a bulk save. Any issue blocks the
/// submission; nothing is partially saved.
pub fn validate_tree(questions: &[Question]) -> Vec<ValidationIssue> {
    questions.iter().flat_map(validate_question).collect()
}
