use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    AssessmentDeveloper,
    AssessmentReviewer,
    Admin,
}

impl UserRole {
    pub fn all() -> &'static [UserRole] {
        &[
            UserRole::AssessmentDeveloper,
            UserRole::AssessmentReviewer,
            UserRole::Admin,
        ]
    }
}

/// A staff account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: Option<jiff::Timestamp>,
}

/// A person assessments are assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Examinee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub created_at: Option<jiff::Timestamp>,
}
