use tracing::info;
use uuid::Uuid;

use acumen_core::error::CoreError;
use acumen_core::models::{AssessmentResponse, QuestionResponse, ResponseStatus};

use crate::dto::{AssessmentResponseDto, BulkAnswersDto, QuestionResponseDto};
use crate::error::ApiError;
use crate::transport::ApiClient;

/// All responses, or just one examinee's when a filter is given.
pub async fn list(
    client: &ApiClient,
    examinee_id: Option<Uuid>,
) -> Result<Vec<AssessmentResponse>, ApiError> {
    let path = match examinee_id {
        Some(id) => format!("/responses?examinee_id={id}"),
        None => "/responses".to_string(),
    };
    let dtos: Vec<AssessmentResponseDto> = client.get(&path).await?;
    Ok(dtos
        .into_iter()
        .map(AssessmentResponseDto::into_domain)
        .collect())
}

pub async fn get(client: &ApiClient, response_id: &str) -> Result<AssessmentResponse, ApiError> {
    let dto: AssessmentResponseDto = client.get(&format!("/responses/{response_id}")).await?;
    Ok(dto.into_domain())
}

/// The unauthenticated examinee view. The server only serves `Pending`
/// responses here.
pub async fn get_public(
    client: &ApiClient,
    response_id: &str,
) -> Result<AssessmentResponse, ApiError> {
    let dto: AssessmentResponseDto = client
        .get(&format!("/responses/public/{response_id}"))
        .await?;
    Ok(dto.into_domain())
}

/// Submit a complete answer list in one call. The server records every
/// answer, transitions the response to `Completed`, and returns it with
/// the authoritative score — the client never computes one.
pub async fn submit(
    client: &ApiClient,
    response_id: &str,
    answers: &[QuestionResponse],
) -> Result<AssessmentResponse, ApiError> {
    let body = BulkAnswersDto {
        question_responses: answers.iter().map(QuestionResponseDto::from_domain).collect(),
    };
    let dto: AssessmentResponseDto = client
        .put(&format!("/responses/{response_id}"), &body)
        .await?;
    info!(response_id, answers = answers.len(), "response submitted");
    Ok(dto.into_domain())
}

#[derive(Debug, serde::Serialize)]
struct StatusBody {
    status: ResponseStatus,
}

/// Move a response to a new status. The client-side state machine is
/// checked first so an illegal move never reaches the wire.
pub async fn change_status(
    client: &ApiClient,
    response: &AssessmentResponse,
    next: ResponseStatus,
) -> Result<AssessmentResponse, ApiError> {
    if !response.status.can_transition_to(next) {
        return Err(CoreError::InvalidTransition {
            from: response.status,
            to: next,
        }
        .into());
    }

    let dto: AssessmentResponseDto = client
        .patch(
            &format!("/responses/{}/change-status", response.id),
            &StatusBody { status: next },
        )
        .await?;
    info!(response_id = %response.id, from = %response.status, to = %next, "status changed");
    Ok(dto.into_domain())
}
