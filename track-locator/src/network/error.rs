//! Network file loading errors.

use crate::domain::DomainError;

/// Errors that can occur while loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid network JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two tracks share a full id
    #[error("duplicate track id: {0}")]
    DuplicateTrack(String),

    /// A connection names a track that is not in the file
    #[error("connection references unknown track: {0}")]
    UnknownTrack(String),

    /// Two stations claim the same yard
    #[error("duplicate station for yard: {0}")]
    DuplicateStation(String),

    /// A track failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}
