use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::author::errors::AuthorError;
use crate::playlist::errors::PlaylistError;
use crate::track::errors::TrackError;
use crate::user::errors::UserError;

pub mod auth;
pub mod authors;
pub mod playlists;
pub mod tracks;
pub mod users;

/// Message for every credential or token rejection; the reason only reaches the logs.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    /// Log the underlying failure and hide it from the client.
    fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "Request failed");
        ApiError::InternalServerError(INTERNAL_ERROR.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::LoginAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials | UserError::IdentityNotFound(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            UserError::InvalidUserId(_) | UserError::InvalidLogin(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(_) | UserError::TokenGeneration(_) | UserError::DatabaseError(_) => {
                ApiError::internal(err)
            }
        }
    }
}

impl From<AuthorError> for ApiError {
    fn from(err: AuthorError) -> Self {
        match err {
            AuthorError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AuthorError::NicknameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AuthorError::InvalidNickname(_) => ApiError::UnprocessableEntity(err.to_string()),
            AuthorError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<TrackError> for ApiError {
    fn from(err: TrackError) -> Self {
        match err {
            TrackError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TrackError::NameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            TrackError::InvalidName(_)
            | TrackError::InvalidDuration(_)
            | TrackError::InvalidFileName(_)
            | TrackError::AuthorNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            TrackError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<PlaylistError> for ApiError {
    fn from(err: PlaylistError) -> Self {
        match err {
            PlaylistError::NotFound(_) | PlaylistError::LinkNotFound { .. } => {
                ApiError::NotFound(err.to_string())
            }
            PlaylistError::TrackAlreadyInPlaylist { .. } => ApiError::Conflict(err.to_string()),
            PlaylistError::InvalidName(_)
            | PlaylistError::OwnerNotFound(_)
            | PlaylistError::TrackNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            PlaylistError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// `?limit=` query parameter shared by the list endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    limit: Option<i64>,
}

impl ListQuery {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 1000;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

/// Parse a numeric path segment, naming the resource in the error.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::UnprocessableEntity(format!("Invalid {} id: {}", resource, raw)))
}
