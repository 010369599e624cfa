use acumen_core::id::EntityId;
use acumen_core::models::{AssessmentResponse, Question, ResponseStatus};
use acumen_responses::{AnswerSheet, AssemblyError};
use uuid::Uuid;

fn response(status: ResponseStatus) -> AssessmentResponse {
    AssessmentResponse {
        id: "a1b2c3".to_string(),
        assessment_id: 1,
        examinee_id: Uuid::new_v4(),
        status,
        score: None,
        question_responses: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

fn question(id: i64, text: &str) -> Question {
    Question {
        id: EntityId::persisted(id),
        assessment_id: 1,
        text: text.to_string(),
        order: Some(id as i32),
        choices: Vec::new(),
        created_at: None,
    }
}

#[test]
fn every_question_answered_yields_one_response_each() {
    let questions = vec![
        question(1, "first"),
        question(2, "second"),
        question(3, "third"),
    ];
    let mut sheet = AnswerSheet::for_response(&response(ResponseStatus::Pending)).unwrap();
    sheet.select(1, 1.0);
    sheet.select(2, 0.0);
    sheet.select(3, 1.0);

    let answers = sheet.assemble(&questions).unwrap();
    assert_eq!(answers.len(), 3);
    assert_eq!(answers[0].assessment_response_id, "a1b2c3");
    assert_eq!(answers[1].question_id, 2);
    // A zero selection is a real answer, not a skip.
    assert_eq!(answers[1].numeric_value, 0.0);
}

#[test]
fn unanswered_question_fails_by_name_with_no_partial_list() {
    let questions = vec![
        question(1, "first"),
        question(2, "second"),
        question(3, "the forgotten one"),
    ];
    let mut sheet = AnswerSheet::for_response(&response(ResponseStatus::Pending)).unwrap();
    sheet.select(1, 1.0);
    sheet.select(2, 1.0);

    match sheet.assemble(&questions) {
        Err(AssemblyError::Unanswered { question }) => {
            assert_eq!(question, "the forgotten one");
        }
        other => panic!("expected Unanswered, got {other:?}"),
    }
}

#[test]
fn reselecting_overwrites_and_clearing_unanswers() {
    let mut sheet = AnswerSheet::for_response(&response(ResponseStatus::Pending)).unwrap();
    sheet.select(1, 0.0);
    sheet.select(1, 1.0);
    assert_eq!(sheet.selected(1), Some(1.0));

    sheet.clear(1);
    assert_eq!(sheet.selected(1), None);
    assert!(sheet.assemble(&[question(1, "first")]).is_err());
}

#[test]
fn only_pending_responses_accept_answers() {
    for status in [
        ResponseStatus::Completed,
        ResponseStatus::Abandoned,
        ResponseStatus::Discarded,
    ] {
        match AnswerSheet::for_response(&response(status)) {
            Err(AssemblyError::NotPending { status: got, .. }) => assert_eq!(got, status),
            other => panic!("expected NotPending, got {other:?}"),
        }
    }
}

#[test]
fn unsaved_questions_cannot_be_answered() {
    let draft = Question::draft(1, 1);
    let sheet = AnswerSheet::for_response(&response(ResponseStatus::Pending)).unwrap();
    assert!(matches!(
        sheet.assemble(std::slice::from_ref(&draft)),
        Err(AssemblyError::UnsavedQuestion { .. })
    ));
}
