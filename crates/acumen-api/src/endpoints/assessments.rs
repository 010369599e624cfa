use tracing::info;
use uuid::Uuid;

use acumen_core::models::{Assessment, AssessmentResponse, Diagnostic, Question};

use crate::dto::{AssessmentDto, AssessmentResponseDto, DiagnosticDto, QuestionDto};
use crate::error::ApiError;
use crate::transport::ApiClient;

pub async fn list(client: &ApiClient) -> Result<Vec<Assessment>, ApiError> {
    let dtos: Vec<AssessmentDto> = client.get("/assessments").await?;
    Ok(dtos.into_iter().map(AssessmentDto::into_domain).collect())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Assessment, ApiError> {
    let dto: AssessmentDto = client.get(&format!("/assessments/{id}")).await?;
    Ok(dto.into_domain())
}

/// Create an assessment. Bounds are resolved client-side first so a
/// Boolean/Scored assessment arrives with its implied range and a
/// Custom one is rejected locally when bounds are missing.
pub async fn create(client: &ApiClient, assessment: &Assessment) -> Result<Assessment, ApiError> {
    let mut outgoing = assessment.clone();
    outgoing.resolve_bounds()?;
    let dto: AssessmentDto = client
        .post("/assessments", &AssessmentDto::from_domain(&outgoing))
        .await?;
    info!(title = %outgoing.title, "assessment created");
    Ok(dto.into_domain())
}

/// Update title/description and scoring fields. Questions are saved
/// separately through the bulk coordinator.
pub async fn update(
    client: &ApiClient,
    id: i64,
    assessment: &Assessment,
) -> Result<Assessment, ApiError> {
    let dto: AssessmentDto = client
        .patch(
            &format!("/assessments/{id}"),
            &AssessmentDto::from_domain(assessment),
        )
        .await?;
    Ok(dto.into_domain())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/assessments/{id}")).await?;
    info!(id, "assessment deleted");
    Ok(())
}

/// Create one question (with its nested choices) outside the bulk flow.
pub async fn create_question(
    client: &ApiClient,
    assessment_id: i64,
    question: &Question,
) -> Result<Question, ApiError> {
    let dto: QuestionDto = client
        .post(
            &format!("/assessments/{assessment_id}/questions"),
            &QuestionDto::from_domain(question),
        )
        .await?;
    Ok(dto.into_domain())
}

/// Replace one persisted question in place, choices included.
pub async fn update_question(
    client: &ApiClient,
    assessment_id: i64,
    question_id: i64,
    question: &Question,
) -> Result<Question, ApiError> {
    let dto: QuestionDto = client
        .put(
            &format!("/assessments/{assessment_id}/questions/{question_id}"),
            &QuestionDto::from_domain(question),
        )
        .await?;
    Ok(dto.into_domain())
}

pub async fn delete_question(
    client: &ApiClient,
    assessment_id: i64,
    question_id: i64,
) -> Result<(), ApiError> {
    client
        .delete(&format!(
            "/assessments/{assessment_id}/questions/{question_id}"
        ))
        .await
}

pub async fn list_diagnostics(
    client: &ApiClient,
    assessment_id: i64,
) -> Result<Vec<Diagnostic>, ApiError> {
    let dtos: Vec<DiagnosticDto> = client
        .get(&format!("/assessments/{assessment_id}/diagnostics"))
        .await?;
    Ok(dtos.into_iter().map(DiagnosticDto::into_domain).collect())
}

pub async fn create_diagnostic(
    client: &ApiClient,
    assessment_id: i64,
    diagnostic: &Diagnostic,
) -> Result<Diagnostic, ApiError> {
    let dto: DiagnosticDto = client
        .post(
            &format!("/assessments/{assessment_id}/diagnostics"),
            &DiagnosticDto::from_domain(diagnostic),
        )
        .await?;
    Ok(dto.into_domain())
}

#[derive(Debug, serde::Serialize)]
struct CreateResponseBody {
    examinee_id: Uuid,
}

/// Assign the assessment to an examinee: a fresh `Pending` response.
pub async fn create_response(
    client: &ApiClient,
    assessment_id: i64,
    examinee_id: Uuid,
) -> Result<AssessmentResponse, ApiError> {
    let dto: AssessmentResponseDto = client
        .post(
            &format!("/assessments/{assessment_id}/responses"),
            &CreateResponseBody { examinee_id },
        )
        .await?;
    info!(assessment_id, %examinee_id, "response assigned");
    Ok(dto.into_domain())
}

pub async fn list_responses(
    client: &ApiClient,
    assessment_id: i64,
) -> Result<Vec<AssessmentResponse>, ApiError> {
    let dtos: Vec<AssessmentResponseDto> = client
        .get(&format!("/assessments/{assessment_id}/responses"))
        .await?;
    Ok(dtos
        .into_iter()
        .map(AssessmentResponseDto::into_domain)
        .collect())
}
