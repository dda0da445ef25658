use thiserror::Error;

use crate::author::models::AuthorId;

/// Error for Nickname validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NicknameError {
    #[error("Nickname is empty")]
    Empty,

    #[error("Nickname too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for author operations
#[derive(Debug, Clone, Error)]
pub enum AuthorError {
    #[error("Invalid nickname: {0}")]
    InvalidNickname(#[from] NicknameError),

    #[error("Author not found: {0}")]
    NotFound(AuthorId),

    #[error("Author already exists: {0}")]
    NicknameAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
