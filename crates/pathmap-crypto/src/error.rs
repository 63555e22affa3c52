/// Errors from checksum operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The named digest algorithm is not available.
    #[error("unsupported checksum algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
