use std::sync::Arc;

use acumen_api::save::bulk_payload;
use acumen_api::{ApiClient, ApiConfig, ApiError, SaveError, SessionState, save_question_tree};
use acumen_core::models::{Choice, Question};

fn valid_draft(assessment_id: i64, order: i32) -> Question {
    let mut question = Question::draft(assessment_id, order);
    question.text = format!("Question {order}");
    let mut choice = Choice::draft(question.id, 1);
    choice.text = "yes".to_string();
    choice.value = 1.0;
    question.choices.push(choice);
    question
}

#[test]
fn bulk_payload_strips_drafts_and_keeps_persisted_ids() {
    let mut persisted = valid_draft(3, 1);
    persisted.id = acumen_core::id::EntityId::persisted(41);
    let draft = valid_draft(3, 2);

    let payload = bulk_payload(&[persisted, draft]);
    let wire = serde_json::to_value(&payload).unwrap();

    assert_eq!(wire["questions"][0]["id"], 41);
    assert!(wire["questions"][1].get("id").is_none());
}

// Points at a port nothing listens on; validation failures must return
// before any connection is attempted.
fn offline_client() -> ApiClient {
    ApiClient::new(
        ApiConfig::new("http://127.0.0.1:1"),
        Arc::new(SessionState::new()),
    )
}

#[tokio::test]
async fn invalid_tree_is_blocked_before_the_wire() {
    let mut question = valid_draft(3, 1);
    question.text = "   ".to_string();

    let err = save_question_tree(&offline_client(), 3, &[question])
        .await
        .unwrap_err();

    match err {
        SaveError::Invalid(issues) => assert_eq!(issues.len(), 1),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_surfaces_as_a_transport_error() {
    let err = save_question_tree(&offline_client(), 3, &[valid_draft(3, 1)])
        .await
        .unwrap_err();

    assert!(matches!(err, SaveError::Api(ApiError::Transport(_))));
}
