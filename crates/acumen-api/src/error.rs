use thiserror::Error;

use acumen_core::error::CoreError;
use acumen_editor::ValidationIssue;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401. The session has already been cleared; the caller should
    /// send the user to the login surface and return them to
    /// `return_path` afterwards.
    #[error("not authenticated")]
    Unauthorized { return_path: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    /// A 4xx business-rule rejection (e.g. deleting an examinee who has
    /// responses). Shown as a warning the user may acknowledge, not a
    /// hard failure.
    #[error("request rejected: {detail}")]
    Rejected { status: u16, detail: String },

    #[error("server error ({status}): {detail}")]
    Http { status: u16, detail: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Error)]
pub enum SaveError {
    /// Local validation failed; nothing was sent to the server.
    #[error("{} validation issue(s) block the save", .0.len())]
    Invalid(Vec<ValidationIssue>),

    #[error(transparent)]
    Api(#[from] ApiError),
}
