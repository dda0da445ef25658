use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::parse_id;
use super::tracks::TrackData;
use super::ApiError;
use super::ApiSuccess;
use super::ListQuery;
use crate::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::models::Nickname;
use crate::domain::author::models::UpdateAuthorCommand;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::track::ports::TrackServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorData {
    pub id: i64,
    pub nickname: String,
}

impl From<&Author> for AuthorData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.0,
            nickname: author.nickname.as_str().to_string(),
        }
    }
}

fn author_id(raw: &str) -> Result<AuthorId, ApiError> {
    parse_id(raw, "author").map(AuthorId)
}

pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ApiSuccess<Vec<AuthorData>>, ApiError> {
    let authors = state.author_service.list_authors(query.limit()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        authors.iter().map(AuthorData::from).collect(),
    ))
}

pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let author_id = author_id(&id)?;

    state
        .author_service
        .get_author(&author_id)
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}

pub async fn list_author_tracks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<TrackData>>, ApiError> {
    let author_id = author_id(&id)?;
    // Unknown author is a 404 rather than an empty list
    state.author_service.get_author(&author_id).await?;

    let tracks = state
        .track_service
        .list_tracks_by_author(&author_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        tracks.iter().map(TrackData::from).collect(),
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthorRequest {
    nickname: String,
}

pub async fn create_author(
    State(state): State<AppState>,
    Json(body): Json<CreateAuthorRequest>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let nickname = Nickname::new(body.nickname).map_err(AuthorError::from)?;

    state
        .author_service
        .create_author(CreateAuthorCommand { nickname })
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::CREATED, author.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAuthorRequest {
    nickname: Option<String>,
}

pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateAuthorRequest>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let author_id = author_id(&id)?;
    let nickname = body
        .nickname
        .map(Nickname::new)
        .transpose()
        .map_err(AuthorError::from)?;

    state
        .author_service
        .update_author(&author_id, UpdateAuthorCommand { nickname })
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}

pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let author_id = author_id(&id)?;

    state
        .author_service
        .delete_author(&author_id)
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}
