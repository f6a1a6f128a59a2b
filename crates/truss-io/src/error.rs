//! Error types for truss-io

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Error, Debug)]
pub enum IoError {
    /// A section keyword the format does not define
    #[error("line {line}: unknown keyword '{keyword}'")]
    UnknownKeyword { line: usize, keyword: String },

    /// Malformed or missing data inside a section
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
