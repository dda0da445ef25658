use thiserror::Error;

use crate::playlist::models::PlaylistId;
use crate::track::models::TrackId;
use crate::user::models::UserId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaylistNameError {
    #[error("Playlist name is empty")]
    Empty,

    #[error("Playlist name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for playlist and playlist-track operations
#[derive(Debug, Clone, Error)]
pub enum PlaylistError {
    #[error("Invalid playlist name: {0}")]
    InvalidName(#[from] PlaylistNameError),

    #[error("Playlist not found: {0}")]
    NotFound(PlaylistId),

    #[error("Owner not found: {0}")]
    OwnerNotFound(UserId),

    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    #[error("Track {track_id} is already in playlist {playlist_id}")]
    TrackAlreadyInPlaylist {
        playlist_id: PlaylistId,
        track_id: TrackId,
    },

    #[error("Track {track_id} is not in playlist {playlist_id}")]
    LinkNotFound {
        playlist_id: PlaylistId,
        track_id: TrackId,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
