use std::fmt;

use crate::author::errors::NicknameError;

/// Performing artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub nickname: Nickname,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(pub i64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Author nickname, unique across the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nickname(String);

impl Nickname {
    const MAX_LENGTH: usize = 100;

    pub fn new(nickname: String) -> Result<Self, NicknameError> {
        let length = nickname.trim().chars().count();
        if length == 0 {
            return Err(NicknameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(NicknameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(nickname.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug)]
pub struct CreateAuthorCommand {
    pub nickname: Nickname,
}

#[derive(Debug)]
pub struct UpdateAuthorCommand {
    pub nickname: Option<Nickname>,
}
