//! Wire shapes for the Acumen API.
//!
//! The server speaks snake_case JSON; the domain models (and the
//! generated TypeScript) speak camelCase. Rather than rewriting keys at
//! runtime, each entity has an explicit DTO struct here plus a total
//! mapping pair to and from its domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use acumen_core::id::EntityId;
use acumen_core::models::{
    Assessment, AssessmentResponse, Choice, Diagnostic, Examinee, Question, QuestionResponse,
    ResponseStatus, ScoringMethod, User, UserRole,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub scoring_method: ScoringMethod,
    #[serde(default)]
    pub questions: Vec<QuestionDto>,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub updated_at: Option<jiff::Timestamp>,
}

impl AssessmentDto {
    pub fn from_domain(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id,
            title: assessment.title.clone(),
            description: assessment.description.clone(),
            min_value: assessment.min_value,
            max_value: assessment.max_value,
            scoring_method: assessment.scoring_method,
            questions: assessment.questions.iter().map(QuestionDto::from_domain).collect(),
            created_at: assessment.created_at,
            updated_at: assessment.updated_at,
        }
    }

    pub fn into_domain(self) -> Assessment {
        Assessment {
            id: self.id,
            title: self.title,
            description: self.description,
            min_value: self.min_value,
            max_value: self.max_value,
            scoring_method: self.scoring_method,
            questions: self.questions.into_iter().map(QuestionDto::into_domain).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDto {
    /// Absent for drafts: a pending id is stripped on the way out so the
    /// server allocates a real one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    pub order: Option<i32>,
    pub assessment_id: i64,
    #[serde(default)]
    pub choices: Vec<ChoiceDto>,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl QuestionDto {
    pub fn from_domain(question: &Question) -> Self {
        Self {
            id: question.id.as_persisted(),
            text: question.text.clone(),
            order: question.order,
            assessment_id: question.assessment_id,
            choices: question.choices.iter().map(ChoiceDto::from_domain).collect(),
            created_at: question.created_at,
        }
    }

    pub fn into_domain(self) -> Question {
        // An entity the server returned without an id is treated as an
        // unsaved draft rather than rejected.
        let id = self
            .id
            .map(EntityId::persisted)
            .unwrap_or_else(EntityId::fresh);
        Question {
            id,
            assessment_id: self.assessment_id,
            text: self.text,
            order: self.order,
            choices: self
                .choices
                .into_iter()
                .map(|c| c.into_domain(id))
                .collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    pub value: f64,
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl ChoiceDto {
    pub fn from_domain(choice: &Choice) -> Self {
        Self {
            id: choice.id.as_persisted(),
            text: choice.text.clone(),
            value: choice.value,
            order: choice.order,
            question_id: choice.question_id.as_persisted(),
            created_at: choice.created_at,
        }
    }

    /// `parent` is the owning question's identity, used when the wire
    /// row omits `question_id` (nested responses do).
    pub fn into_domain(self, parent: EntityId) -> Choice {
        Choice {
            id: self
                .id
                .map(EntityId::persisted)
                .unwrap_or_else(EntityId::fresh),
            question_id: self
                .question_id
                .map(EntityId::persisted)
                .unwrap_or(parent),
            text: self.text,
            value: self.value,
            order: self.order,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<i64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub description: String,
}

impl DiagnosticDto {
    pub fn from_domain(diagnostic: &Diagnostic) -> Self {
        Self {
            id: diagnostic.id,
            assessment_id: diagnostic.assessment_id,
            min_value: diagnostic.min_value,
            max_value: diagnostic.max_value,
            description: diagnostic.description.clone(),
        }
    }

    pub fn into_domain(self) -> Diagnostic {
        Diagnostic {
            id: self.id,
            assessment_id: self.assessment_id,
            min_value: self.min_value,
            max_value: self.max_value,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponseDto {
    pub id: String,
    pub assessment_id: i64,
    pub examinee_id: Uuid,
    pub status: ResponseStatus,
    pub score: Option<f64>,
    #[serde(default)]
    pub question_responses: Vec<QuestionResponseDto>,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub updated_at: Option<jiff::Timestamp>,
}

impl AssessmentResponseDto {
    pub fn into_domain(self) -> AssessmentResponse {
        AssessmentResponse {
            id: self.id,
            assessment_id: self.assessment_id,
            examinee_id: self.examinee_id,
            status: self.status,
            score: self.score,
            question_responses: self
                .question_responses
                .into_iter()
                .map(QuestionResponseDto::into_domain)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub assessment_response_id: String,
    pub question_id: i64,
    pub numeric_value: f64,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl QuestionResponseDto {
    pub fn from_domain(answer: &QuestionResponse) -> Self {
        Self {
            id: answer.id,
            assessment_response_id: answer.assessment_response_id.clone(),
            question_id: answer.question_id,
            numeric_value: answer.numeric_value,
            created_at: answer.created_at,
        }
    }

    pub fn into_domain(self) -> QuestionResponse {
        QuestionResponse {
            id: self.id,
            assessment_response_id: self.assessment_response_id,
            question_id: self.question_id,
            numeric_value: self.numeric_value,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl UserDto {
    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }

    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamineeDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl ExamineeDto {
    pub fn from_domain(examinee: &Examinee) -> Self {
        Self {
            id: examinee.id,
            first_name: examinee.first_name.clone(),
            last_name: examinee.last_name.clone(),
            email: examinee.email.clone(),
            created_at: examinee.created_at,
        }
    }

    pub fn into_domain(self) -> Examinee {
        Examinee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// `/auth/token` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}

/// Body for `PUT /assessments/{id}/questions/bulk`: the full edited tree,
/// replacing whatever the server holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkQuestionsDto {
    pub questions: Vec<QuestionDto>,
}

/// Body for `PUT /responses/{id}`: every answer at once; the server
/// completes the response and computes the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAnswersDto {
    pub question_responses: Vec<QuestionResponseDto>,
}
