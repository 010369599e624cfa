use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::SessionState;

/// HTTP transport for the Acumen API.
///
/// Injects the bearer token when a session is present, translates the
/// server's error shapes into [`ApiError`], and clears the session on a
/// 401 so the caller can bounce to login. One request per call — no
/// retries, no deduplication.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<SessionState>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Arc<SessionState>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.config.endpoint(path));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::GET, path), path).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::POST, path).json(body), path)
            .await
    }

    /// POST with a urlencoded form body (the OAuth2 token endpoint).
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::POST, path).form(form), path)
            .await
    }

    /// POST with no body, discarding the response payload.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, path), path).await?;
        Ok(())
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::PUT, path).json(body), path)
            .await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::PATCH, path).json(body), path)
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path), path)
            .await?;
        Ok(())
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let body = self.execute(builder, path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn execute(&self, builder: RequestBuilder, path: &str) -> Result<String, ApiError> {
        debug!(path, "api request");
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(path, "server rejected the session token");
            self.session.clear();
            return Err(ApiError::Unauthorized {
                return_path: path.to_string(),
            });
        }

        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let detail = error_detail(&body, status);
        Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound {
                resource: path.to_string(),
            },
            s if s.is_client_error() => ApiError::Rejected {
                status: s.as_u16(),
                detail,
            },
            s => ApiError::Http {
                status: s.as_u16(),
                detail,
            },
        })
    }
}

/// Pull the server's `detail` message out of an error body, falling back
/// to the status line when the body is not the expected JSON shape.
fn error_detail(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}
