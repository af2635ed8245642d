//! Error types for key-selection operations.

use thiserror::Error;

/// Errors that can occur during key-selection operations.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// A required key is absent from the wrapped record.
    #[error("missing key {key:?} for {record}")]
    MissingKey { key: String, record: String },
}

/// Convenience type alias for key-selection operations.
pub type Result<T> = std::result::Result<T, ParamsError>;
