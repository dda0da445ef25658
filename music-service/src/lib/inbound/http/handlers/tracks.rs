use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use super::ListQuery;
use crate::domain::author::models::AuthorId;
use crate::domain::track::models::CreateTrackCommand;
use crate::domain::track::models::FileName;
use crate::domain::track::models::Track;
use crate::domain::track::models::TrackDuration;
use crate::domain::track::models::TrackId;
use crate::domain::track::models::TrackName;
use crate::domain::track::models::UpdateTrackCommand;
use crate::domain::track::ports::TrackServicePort;
use crate::inbound::http::router::AppState;
use crate::track::errors::TrackError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackData {
    pub id: i64,
    pub name: String,
    /// Length in seconds
    pub duration: i32,
    pub author_id: i64,
    pub file_name: String,
}

impl From<&Track> for TrackData {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.0,
            name: track.name.as_str().to_string(),
            duration: track.duration.seconds(),
            author_id: track.author_id.0,
            file_name: track.file_name.as_str().to_string(),
        }
    }
}

fn track_id(raw: &str) -> Result<TrackId, ApiError> {
    parse_id(raw, "track").map(TrackId)
}

pub async fn list_tracks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ApiSuccess<Vec<TrackData>>, ApiError> {
    let tracks = state.track_service.list_tracks(query.limit()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        tracks.iter().map(TrackData::from).collect(),
    ))
}

pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<TrackData>, ApiError> {
    let track_id = track_id(&id)?;

    state
        .track_service
        .get_track(&track_id)
        .await
        .map_err(ApiError::from)
        .map(|ref track| ApiSuccess::new(StatusCode::OK, track.into()))
}

/// HTTP request body for creating a track (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrackRequest {
    name: String,
    duration: i32,
    author_id: i64,
    file_name: String,
}

impl CreateTrackRequest {
    fn try_into_command(self) -> Result<CreateTrackCommand, TrackError> {
        Ok(CreateTrackCommand {
            name: TrackName::new(self.name)?,
            duration: TrackDuration::new(self.duration)?,
            author_id: AuthorId(self.author_id),
            file_name: FileName::new(self.file_name)?,
        })
    }
}

pub async fn create_track(
    State(state): State<AppState>,
    Json(body): Json<CreateTrackRequest>,
) -> Result<ApiSuccess<TrackData>, ApiError> {
    state
        .track_service
        .create_track(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref track| ApiSuccess::new(StatusCode::CREATED, track.into()))
}

/// HTTP request body for updating a track (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrackRequest {
    name: Option<String>,
    duration: Option<i32>,
    author_id: Option<i64>,
    file_name: Option<String>,
}

impl UpdateTrackRequest {
    fn try_into_command(self) -> Result<UpdateTrackCommand, TrackError> {
        Ok(UpdateTrackCommand {
            name: self.name.map(TrackName::new).transpose()?,
            duration: self.duration.map(TrackDuration::new).transpose()?,
            author_id: self.author_id.map(AuthorId),
            file_name: self.file_name.map(FileName::new).transpose()?,
        })
    }
}

pub async fn update_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTrackRequest>,
) -> Result<ApiSuccess<TrackData>, ApiError> {
    let track_id = track_id(&id)?;
    let command = body.try_into_command()?;

    state
        .track_service
        .update_track(&track_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref track| ApiSuccess::new(StatusCode::OK, track.into()))
}

pub async fn delete_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<TrackData>, ApiError> {
    let track_id = track_id(&id)?;

    state
        .track_service
        .delete_track(&track_id)
        .await
        .map_err(ApiError::from)
        .map(|ref track| ApiSuccess::new(StatusCode::OK, track.into()))
}
