//! Error types for label files, settings and image metadata.
//!
//! The viewer's interactive path never fails; these errors only come from
//! the edges that touch the filesystem or parse user-provided data.

use thiserror::Error;

use crate::types::LabelKind;

/// Errors that can occur while loading, validating or saving label data
#[derive(Error, Debug)]
pub enum LabelError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image header could not be read
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File watcher failure
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Temp file could not be persisted over the target path
    #[error("Save failed: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Two labels in the same list share an identifier
    #[error("Duplicate {kind} label id: {id}")]
    DuplicateId { kind: LabelKind, id: String },

    /// Label geometry outside the allowed range
    #[error("Invalid {kind} label {id}: {reason}")]
    InvalidLabel {
        kind: LabelKind,
        id: String,
        reason: String,
    },

    /// Color string is not `#rrggbb`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Palette must contain at least one color
    #[error("Empty palette")]
    EmptyPalette,

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for label operations
pub type LabelResult<T> = Result<T, LabelError>;

impl From<String> for LabelError {
    fn from(s: String) -> Self {
        LabelError::Other(s)
    }
}

impl From<&str> for LabelError {
    fn from(s: &str) -> Self {
        LabelError::Other(s.to_string())
    }
}
