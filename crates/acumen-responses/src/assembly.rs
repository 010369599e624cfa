use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use acumen_core::models::{AssessmentResponse, Question, QuestionResponse, ResponseStatus};

use crate::error::AssemblyError;

/// The examinee's in-progress selections for one pending response.
///
/// Keyed by persisted question id; the stored value is the selected
/// choice's numeric contribution. Submission is all-or-nothing: every
/// question in the assessment must carry a selection before a payload is
/// produced, and the first unanswered question is named in the error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnswerSheet {
    response_id: String,
    selections: BTreeMap<i64, f64>,
}

impl AnswerSheet {
    /// Start a sheet for a response. Only `Pending` responses are
    /// mutable; every other status is rejected.
    pub fn for_response(response: &AssessmentResponse) -> Result<Self, AssemblyError> {
        if response.status != ResponseStatus::Pending {
            return Err(AssemblyError::NotPending {
                response_id: response.id.clone(),
                status: response.status,
            });
        }
        Ok(Self {
            response_id: response.id.clone(),
            selections: BTreeMap::new(),
        })
    }

    /// Record the selected choice's value for a question. Re-selecting
    /// overwrites the previous pick.
    pub fn select(&mut self, question_id: i64, value: f64) {
        self.selections.insert(question_id, value);
    }

    /// Drop the selection for a question, if any.
    pub fn clear(&mut self, question_id: i64) {
        self.selections.remove(&question_id);
    }

    pub fn selected(&self, question_id: i64) -> Option<f64> {
        self.selections.get(&question_id).copied()
    }

    /// Build one `QuestionResponse` per question.
    ///
    /// Fails on the first question without a selection, naming it; no
    /// partial list is ever returned. A selection of 0 is kept — zero is
    /// a valid score contribution, not an absent answer. Questions still
    /// carrying a draft id cannot be answered.
    pub fn assemble(
        &self,
        questions: &[Question],
    ) -> Result<Vec<QuestionResponse>, AssemblyError> {
        let mut answers = Vec::with_capacity(questions.len());

        for question in questions {
            let question_id =
                question
                    .id
                    .as_persisted()
                    .ok_or_else(|| AssemblyError::UnsavedQuestion {
                        question: question.text.clone(),
                    })?;

            let value =
                self.selected(question_id)
                    .ok_or_else(|| AssemblyError::Unanswered {
                        question: question.text.clone(),
                    })?;

            answers.push(QuestionResponse {
                id: None,
                assessment_response_id: self.response_id.clone(),
                question_id,
                numeric_value: value,
                created_at: None,
            });
        }

        Ok(answers)
    }
}
