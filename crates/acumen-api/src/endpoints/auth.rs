use tracing::info;

use acumen_core::models::User;

use crate::dto::{TokenDto, UserDto};
use crate::error::ApiError;
use crate::session::Session;
use crate::transport::ApiClient;

/// Exchange credentials for a bearer token, then fetch the profile.
/// Both land in the session; the returned user drives role gating.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
    // The token endpoint is an OAuth2 password form, not JSON.
    let token: TokenDto = client
        .post_form("/auth/token", &[("username", email), ("password", password)])
        .await?;
    client.session().set(Session {
        token: token.access_token,
        user: None,
    });

    let me: UserDto = client.get("/auth/me").await?;
    let user = me.into_domain();
    client.session().set_user(user.clone());
    info!(email, "logged in");
    Ok(user)
}

/// Re-fetch the current user for an existing token (e.g. after a
/// session restore).
pub async fn current_user(client: &ApiClient) -> Result<User, ApiError> {
    let me: UserDto = client.get("/auth/me").await?;
    let user = me.into_domain();
    client.session().set_user(user.clone());
    Ok(user)
}

/// Invalidate the token server-side. The local session is torn down
/// whether or not the server call succeeds.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let result = client.post_empty("/auth/logout").await;
    client.session().clear();
    info!("logged out");
    result
}
