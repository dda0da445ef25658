use std::fmt;

use crate::user::errors::LoginError;
use crate::user::errors::UserIdError;

/// Registered identity.
///
/// `password_hash` is an Argon2id PHC string; the plaintext is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub password_hash: String,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from its string form (as carried in a token subject).
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// Non-empty, at most 64 characters, no whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid login.
    ///
    /// # Errors
    /// * `Empty` - Login is an empty string
    /// * `TooLong` - Login longer than 64 characters
    /// * `InvalidCharacters` - Contains whitespace or control characters
    pub fn new(login: String) -> Result<Self, LoginError> {
        let length = login.chars().count();
        if length == 0 {
            return Err(LoginError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(LoginError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if login.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(LoginError::InvalidCharacters);
        }
        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity fields handed to persistence; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: Login,
    pub password_hash: String,
}

/// Command to register a new identity.
pub struct RegisterCommand {
    pub login: Login,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `login` - Validated login
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(login: Login, password: String) -> Self {
        Self { login, password }
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Command to exchange credentials for an access token.
///
/// The login is kept raw: a login that would fail validation is simply an
/// unknown login.
pub struct LoginCommand {
    pub login: String,
    pub password: String,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Command to update an existing identity.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
pub struct UpdateUserCommand {
    pub login: Option<Login>,
    pub password: Option<String>,
}

impl fmt::Debug for UpdateUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserCommand")
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Signed bearer token returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}
