use focuskit_core::error::CoreError;
use thiserror::Error;

use crate::session::{Operation, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cannot {operation} while session is {state}: {reason}")]
    InvalidStateTransition {
        operation: Operation,
        state: SessionState,
        reason: String,
    },

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}

impl From<CoreError> for AssessmentError {
    fn from(e: CoreError) -> Self {
        AssessmentError::InvalidInput(e.to_string())
    }
}
