//! The bulk save coordinator for the question editor.
//!
//! The editor's whole tree is persisted in one atomic replace: either
//! every question and choice lands, or nothing does and the local edit
//! state is untouched for a manual retry.

use tracing::info;

use acumen_core::models::Question;
use acumen_editor::validate_tree;

use crate::dto::{BulkQuestionsDto, QuestionDto};
use crate::error::SaveError;
use crate::transport::ApiClient;

/// The wire payload for a bulk save: every pending id is stripped so the
/// server allocates real ids; persisted ids pass through unchanged.
pub fn bulk_payload(questions: &[Question]) -> BulkQuestionsDto {
    BulkQuestionsDto {
        questions: questions.iter().map(QuestionDto::from_domain).collect(),
    }
}

/// Persist a locally edited question tree.
///
/// Validates first — any issue blocks the submission with nothing sent.
/// On success the server's canonical list comes back; the caller
/// replaces its local tree with it wholesale, discarding draft ids and
/// local orders in favor of server truth. On failure the borrowed tree
/// is untouched.
pub async fn save_question_tree(
    client: &ApiClient,
    assessment_id: i64,
    questions: &[Question],
) -> Result<Vec<Question>, SaveError> {
    let issues = validate_tree(questions);
    if !issues.is_empty() {
        return Err(SaveError::Invalid(issues));
    }

    let payload = bulk_payload(questions);
    let canonical: Vec<QuestionDto> = client
        .put(
            &format!("/assessments/{assessment_id}/questions/bulk"),
            &payload,
        )
        .await
        .map_err(SaveError::Api)?;

    info!(assessment_id, questions = canonical.len(), "question tree saved");
    Ok(canonical.into_iter().map(QuestionDto::into_domain).collect())
}
