use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::parse_id;
use super::ApiError;
use super::ApiSuccess;
use super::ListQuery;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::PlaylistName;
use crate::domain::playlist::models::PlaylistTrack;
use crate::domain::playlist::models::UpdatePlaylistCommand;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::domain::track::models::TrackId;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::playlist::errors::PlaylistError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistData {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
}

impl From<&Playlist> for PlaylistData {
    fn from(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id.0,
            name: playlist.name.as_str().to_string(),
            user_id: playlist.user_id.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistTrackData {
    pub id: i64,
    pub playlist_id: i64,
    pub track_id: i64,
}

impl From<&PlaylistTrack> for PlaylistTrackData {
    fn from(link: &PlaylistTrack) -> Self {
        Self {
            id: link.id,
            playlist_id: link.playlist_id.0,
            track_id: link.track_id.0,
        }
    }
}

fn playlist_id(raw: &str) -> Result<PlaylistId, ApiError> {
    parse_id(raw, "playlist").map(PlaylistId)
}

pub async fn list_playlists(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ApiSuccess<Vec<PlaylistData>>, ApiError> {
    let playlists = state.playlist_service.list_playlists(query.limit()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        playlists.iter().map(PlaylistData::from).collect(),
    ))
}

pub async fn get_playlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<PlaylistData>, ApiError> {
    let playlist_id = playlist_id(&id)?;

    state
        .playlist_service
        .get_playlist(&playlist_id)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::OK, playlist.into()))
}

/// HTTP request body for creating a playlist. The owner defaults to the
/// authenticated identity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistRequest {
    name: String,
    user_id: Option<i64>,
}

pub async fn create_playlist(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePlaylistRequest>,
) -> Result<ApiSuccess<PlaylistData>, ApiError> {
    let command = CreatePlaylistCommand {
        name: PlaylistName::new(body.name).map_err(PlaylistError::from)?,
        user_id: body.user_id.map(UserId).unwrap_or(current.user_id),
    };

    state
        .playlist_service
        .create_playlist(command)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::CREATED, playlist.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlaylistRequest {
    name: Option<String>,
    user_id: Option<i64>,
}

pub async fn update_playlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePlaylistRequest>,
) -> Result<ApiSuccess<PlaylistData>, ApiError> {
    let playlist_id = playlist_id(&id)?;
    let command = UpdatePlaylistCommand {
        name: body
            .name
            .map(PlaylistName::new)
            .transpose()
            .map_err(PlaylistError::from)?,
        user_id: body.user_id.map(UserId),
    };

    state
        .playlist_service
        .update_playlist(&playlist_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::OK, playlist.into()))
}

pub async fn delete_playlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<PlaylistData>, ApiError> {
    let playlist_id = playlist_id(&id)?;

    state
        .playlist_service
        .delete_playlist(&playlist_id)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::OK, playlist.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTrackRequest {
    track_id: i64,
}

pub async fn add_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AddTrackRequest>,
) -> Result<ApiSuccess<PlaylistTrackData>, ApiError> {
    let playlist_id = playlist_id(&id)?;

    state
        .playlist_service
        .add_track(&playlist_id, &TrackId(body.track_id))
        .await
        .map_err(ApiError::from)
        .map(|ref link| ApiSuccess::new(StatusCode::CREATED, link.into()))
}

pub async fn list_tracks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<PlaylistTrackData>>, ApiError> {
    let playlist_id = playlist_id(&id)?;
    // Unknown playlist is a 404 rather than an empty list
    state.playlist_service.get_playlist(&playlist_id).await?;

    let links = state.playlist_service.list_tracks(&playlist_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        links.iter().map(PlaylistTrackData::from).collect(),
    ))
}

pub async fn remove_track(
    State(state): State<AppState>,
    Path((playlist, track)): Path<(String, String)>,
) -> Result<ApiSuccess<PlaylistTrackData>, ApiError> {
    let playlist_id = playlist_id(&playlist)?;
    let track_id = parse_id(&track, "track").map(TrackId)?;

    state
        .playlist_service
        .remove_track(&playlist_id, &track_id)
        .await
        .map_err(ApiError::from)
        .map(|ref link| ApiSuccess::new(StatusCode::OK, link.into()))
}
