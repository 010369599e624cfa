pub mod assessment;
pub mod diagnostic;
pub mod response;
pub mod user;

pub use assessment::{Assessment, Choice, Question, ScoringMethod};
pub use diagnostic::Diagnostic;
pub use response::{AssessmentResponse, QuestionResponse, ResponseStatus};
pub use user::{Examinee, User, UserRole};
