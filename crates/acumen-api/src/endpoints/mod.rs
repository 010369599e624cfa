//! Typed wrappers over the REST surface, one module per feature area.
//! Each function is a single request; callers own retry/disable-button
//! behavior.

pub mod assessments;
pub mod auth;
pub mod examinees;
pub mod responses;
pub mod users;
