use pathmap_crypto::CryptoError;
use pathmap_types::TypeError;

/// Errors from write sessions and their collaborators.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The configured checksum algorithm is not available.
    #[error("unsupported checksum algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Forwarding bytes to the physical sink failed. The partial artifact
    /// has already been handed to the backend for deletion.
    #[error("write to physical sink failed: {0}")]
    SinkWrite(#[source] std::io::Error),

    /// Closing the physical sink failed.
    #[error("closing physical sink failed: {0}")]
    SinkClose(#[source] std::io::Error),

    /// The metadata index rejected the record after the bytes were durable.
    #[error("metadata insert failed: {0}")]
    MetadataInsert(String),

    /// A write was attempted after an earlier write failed.
    #[error("write session for {path} already failed")]
    SessionFailed { path: String },

    /// The logical path is unusable for a record (rejected at session open).
    #[error("invalid file record: {0}")]
    InvalidRecord(#[from] TypeError),

    /// I/O error from a storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<CryptoError> for StoreError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::UnsupportedAlgorithm(name) => Self::UnsupportedAlgorithm(name),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
