use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the Acumen API lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read `ACUMEN_API_URL`, falling back to the local dev server.
    pub fn from_env() -> Self {
        match std::env::var("ACUMEN_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Absolute URL for an API path like `/assessments/3`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
