use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("checksum is not lowercase hex: {0}")]
    InvalidChecksum(String),
}
