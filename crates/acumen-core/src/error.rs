use thiserror::Error;

use crate::models::ResponseStatus;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("custom scoring method requires explicit {0}")]
    MissingBound(&'static str),

    #[error("cannot change response status from {from} to {to}")]
    InvalidTransition {
        from: ResponseStatus,
        to: ResponseStatus,
    },
}
