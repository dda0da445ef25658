use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::user::errors::UserError;
use crate::user::models::AccessToken;
use crate::user::models::Login;
use crate::user::models::LoginCommand;
use crate::user::models::NewUser;
use crate::user::models::RegisterCommand;
use crate::user::models::UpdateUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for identity operations.
///
/// Combines the user repository with the shared `Authenticator`, which owns
/// password hashing and token signing.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token signer
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn ensure_login_available(
        &self,
        login: &Login,
        owner: Option<UserId>,
    ) -> Result<(), UserError> {
        match self.repository.find_by_login(login).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(UserError::LoginAlreadyExists(login.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        self.ensure_login_available(&command.login, None).await?;

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = self
            .repository
            .create(NewUser {
                login: command.login,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, login = %user.login, "Identity registered");

        Ok(user)
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError> {
        let Ok(login) = Login::new(command.login) else {
            return Err(UserError::InvalidCredentials);
        };

        let user = self
            .repository
            .find_by_login(&login)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, user.id)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::JwtError(err) => UserError::TokenGeneration(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Access token issued");

        Ok(AccessToken {
            token: result.access_token,
            expires_in: result.expires_in,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<User, UserError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(reason = %e, "Bearer token rejected");
            UserError::InvalidCredentials
        })?;

        let user_id = UserId::from_string(&claims.sub).map_err(|e| {
            tracing::warn!(reason = %e, "Bearer token subject is not a user id");
            UserError::InvalidCredentials
        })?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::IdentityNotFound(user_id))
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(*id))
    }

    async fn list_users(&self, limit: i64) -> Result<Vec<User>, UserError> {
        self.repository.list(limit).await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(*id))?;

        if let Some(new_login) = command.login {
            self.ensure_login_available(&new_login, Some(user.id))
                .await?;
            user.login = new_login;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.authenticator.hash_password(&new_password)?;
        }

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "Identity updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<User, UserError> {
        let deleted_user = self.repository.delete(id).await?;
        tracing::info!(user_id = %deleted_user.id, "Identity deleted");

        Ok(deleted_user)
    }
}
