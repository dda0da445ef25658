use std::fmt;

use crate::playlist::errors::PlaylistNameError;
use crate::track::models::TrackId;
use crate::user::models::UserId;

/// A user's playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: PlaylistName,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaylistId(pub i64);

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistName(String);

impl PlaylistName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: String) -> Result<Self, PlaylistNameError> {
        let name = name.trim();
        let length = name.chars().count();
        if length == 0 {
            return Err(PlaylistNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(PlaylistNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Membership of one track in one playlist. A track appears at most once
/// per playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistTrack {
    pub id: i64,
    pub playlist_id: PlaylistId,
    pub track_id: TrackId,
}

#[derive(Debug)]
pub struct CreatePlaylistCommand {
    pub name: PlaylistName,
    pub user_id: UserId,
}

/// Partial playlist update; `None` leaves the field unchanged.
#[derive(Debug)]
pub struct UpdatePlaylistCommand {
    pub name: Option<PlaylistName>,
    pub user_id: Option<UserId>,
}
