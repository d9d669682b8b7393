//! Error types for the rebind library.

use thiserror::Error;

/// Result type alias for rebind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while chunking, translating, or laying out text.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured maximum chunk size is zero.
    #[error("Invalid chunk size: must be greater than zero")]
    InvalidChunkSize,

    /// Page geometry or font metrics leave no room to place text.
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// The external translator failed on one chunk; the whole run is aborted.
    #[error("Translation failed for chunk {index}: {message}")]
    Translation {
        /// Zero-based index of the chunk that failed.
        index: usize,
        /// Message reported by the translation collaborator.
        message: String,
    },

    /// Error serializing elements or pages for an external consumer.
    #[error("JSON serialization error: {0}")]
    Json(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
