use serde::Serialize;
use thiserror::Error;

use acumen_core::models::ResponseStatus;

#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
pub enum AssemblyError {
    #[error("response {response_id} is {status}; only pending responses accept answers")]
    NotPending {
        response_id: String,
        status: ResponseStatus,
    },

    #[error("no answer selected for question: {question}")]
    Unanswered { question: String },

    #[error("question '{question}' has not been saved yet and cannot be answered")]
    UnsavedQuestion { question: String },
}
