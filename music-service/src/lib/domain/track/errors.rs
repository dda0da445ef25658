use thiserror::Error;

use crate::author::models::AuthorId;
use crate::track::models::TrackId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackNameError {
    #[error("Track name is empty")]
    Empty,

    #[error("Track name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackDurationError {
    #[error("Track duration must not be negative, got {0}")]
    Negative(i32),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileNameError {
    #[error("File name is empty")]
    Empty,

    #[error("File name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("File name must be a plain file name without path components")]
    NotAPlainName,
}

/// Top-level error for track operations
#[derive(Debug, Clone, Error)]
pub enum TrackError {
    #[error("Invalid track name: {0}")]
    InvalidName(#[from] TrackNameError),

    #[error("Invalid track duration: {0}")]
    InvalidDuration(#[from] TrackDurationError),

    #[error("Invalid file name: {0}")]
    InvalidFileName(#[from] FileNameError),

    #[error("Track not found: {0}")]
    NotFound(TrackId),

    #[error("Track already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Author not found: {0}")]
    AuthorNotFound(AuthorId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
