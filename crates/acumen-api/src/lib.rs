//! acumen-api
//!
//! REST client for the Acumen assessment platform: transport with bearer
//! auth and 401 handling, wire DTOs and their domain mappings, session
//! state, role guards, and the bulk save coordinator for the question
//! editor. Each call is a single request/await — no retries, no
//! deduplication; a failure surfaces once and local state stays intact.

pub mod config;
pub mod dto;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod save;
pub mod session;
pub mod transport;

pub use config::ApiConfig;
pub use error::{ApiError, SaveError};
pub use guard::{GuardError, RouteGuard, login_redirect};
pub use save::save_question_tree;
pub use session::{Session, SessionState};
pub use transport::ApiClient;
