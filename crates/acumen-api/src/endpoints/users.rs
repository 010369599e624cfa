use uuid::Uuid;

use acumen_core::models::User;

use crate::dto::UserDto;
use crate::error::ApiError;
use crate::transport::ApiClient;

pub async fn list(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    let dtos: Vec<UserDto> = client.get("/users").await?;
    Ok(dtos.into_iter().map(UserDto::into_domain).collect())
}

pub async fn create(client: &ApiClient, user: &User) -> Result<User, ApiError> {
    let dto: UserDto = client.post("/users", &UserDto::from_domain(user)).await?;
    Ok(dto.into_domain())
}

pub async fn update(client: &ApiClient, id: Uuid, user: &User) -> Result<User, ApiError> {
    let dto: UserDto = client
        .put(&format!("/users/{id}"), &UserDto::from_domain(user))
        .await?;
    Ok(dto.into_domain())
}
