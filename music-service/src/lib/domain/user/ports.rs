use async_trait::async_trait;

use crate::user::errors::UserError;
use crate::user::models::AccessToken;
use crate::user::models::Login;
use crate::user::models::LoginCommand;
use crate::user::models::NewUser;
use crate::user::models::RegisterCommand;
use crate::user::models::UpdateUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;

/// Port for identity operations: registration, login, token resolution and
/// user management.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new identity, storing only a salted hash of the password.
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Login is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// Unknown logins and wrong passwords fail identically.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Login unknown or password mismatch
    /// * `TokenGeneration` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError>;

    /// Resolve a raw bearer token to the identity it names.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Token is forged, malformed, expired or has a bad subject
    /// * `IdentityNotFound` - Token is valid but its subject no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, token: &str) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// List users, at most `limit` of them.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self, limit: i64) -> Result<Vec<User>, UserError>;

    /// Update existing user with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `LoginAlreadyExists` - New login is already taken
    /// * `Password` - Hashing the new password failed
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete existing user, returning the removed record.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence operations for identities.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user and return it with its assigned id.
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Login is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by login.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError>;

    /// Retrieve up to `limit` users ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, limit: i64) -> Result<Vec<User>, UserError>;

    /// Overwrite a stored user with the given record.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `LoginAlreadyExists` - New login is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage and return the removed record.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<User, UserError>;
}
