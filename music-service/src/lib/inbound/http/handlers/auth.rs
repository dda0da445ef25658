use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::users::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Login;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let login = Login::new(body.login).map_err(UserError::from)?;

    state
        .user_service
        .register(RegisterCommand::new(login, body.password))
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let token = state
        .user_service
        .login(LoginCommand {
            login: body.login,
            password: body.password,
        })
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenData {
            access_token: token.token,
            token_type: "bearer".to_string(),
            expires_in: token.expires_in,
        },
    ))
}

/// Login and password, shared by registration and login.
#[derive(Clone, Deserialize)]
pub struct CredentialsRequest {
    login: String,
    password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}
