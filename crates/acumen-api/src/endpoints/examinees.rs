use tracing::info;
use uuid::Uuid;

use acumen_core::models::Examinee;

use crate::dto::ExamineeDto;
use crate::error::ApiError;
use crate::transport::ApiClient;

pub async fn list(client: &ApiClient) -> Result<Vec<Examinee>, ApiError> {
    let dtos: Vec<ExamineeDto> = client.get("/examinees").await?;
    Ok(dtos.into_iter().map(ExamineeDto::into_domain).collect())
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Examinee, ApiError> {
    let dto: ExamineeDto = client.get(&format!("/examinees/{id}")).await?;
    Ok(dto.into_domain())
}

pub async fn create(client: &ApiClient, examinee: &Examinee) -> Result<Examinee, ApiError> {
    let dto: ExamineeDto = client
        .post("/examinees", &ExamineeDto::from_domain(examinee))
        .await?;
    info!(id = %dto.id, "examinee created");
    Ok(dto.into_domain())
}

pub async fn update(
    client: &ApiClient,
    id: Uuid,
    examinee: &Examinee,
) -> Result<Examinee, ApiError> {
    let dto: ExamineeDto = client
        .put(&format!("/examinees/{id}"), &ExamineeDto::from_domain(examinee))
        .await?;
    Ok(dto.into_domain())
}

/// Delete an examinee. When the examinee still has responses the server
/// answers with a business-rule rejection ([`ApiError::Rejected`]); the
/// screen shows it as a confirmable warning rather than a hard failure.
pub async fn delete(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    client.delete(&format!("/examinees/{id}")).await?;
    info!(%id, "examinee deleted");
    Ok(())
}
