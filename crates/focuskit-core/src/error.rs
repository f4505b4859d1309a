use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("response value {0} is outside the 0-3 scale")]
    InvalidResponseValue(u8),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown response option: {0}")]
    UnknownResponseOption(String),
}
