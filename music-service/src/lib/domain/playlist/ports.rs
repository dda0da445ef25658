use async_trait::async_trait;

use crate::playlist::errors::PlaylistError;
use crate::playlist::models::CreatePlaylistCommand;
use crate::playlist::models::Playlist;
use crate::playlist::models::PlaylistId;
use crate::playlist::models::PlaylistTrack;
use crate::playlist::models::UpdatePlaylistCommand;
use crate::track::models::TrackId;
use crate::user::models::UserId;

/// Port for playlist operations, including playlist membership.
#[async_trait]
pub trait PlaylistServicePort: Send + Sync + 'static {
    async fn list_playlists(&self, limit: i64) -> Result<Vec<Playlist>, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    async fn get_playlist(&self, id: &PlaylistId) -> Result<Playlist, PlaylistError>;

    /// Playlists owned by one user; an unknown user simply has none.
    async fn list_user_playlists(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Playlist>, PlaylistError>;

    /// # Errors
    /// * `OwnerNotFound` - Owning user does not exist
    async fn create_playlist(
        &self,
        command: CreatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `OwnerNotFound` - New owner does not exist
    async fn update_playlist(
        &self,
        id: &PlaylistId,
        command: UpdatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<Playlist, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `TrackNotFound` - Track does not exist
    /// * `TrackAlreadyInPlaylist` - Track is already a member
    async fn add_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrack, PlaylistError>;

    async fn list_tracks(&self, playlist_id: &PlaylistId)
        -> Result<Vec<PlaylistTrack>, PlaylistError>;

    /// Remove a track from a playlist, returning the removed membership.
    ///
    /// # Errors
    /// * `LinkNotFound` - Track is not in the playlist
    async fn remove_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrack, PlaylistError>;
}

/// Persistence operations for playlists and their tracks.
#[async_trait]
pub trait PlaylistRepository: Send + Sync + 'static {
    /// # Errors
    /// * `OwnerNotFound` - Owning user does not exist
    async fn create(&self, command: CreatePlaylistCommand) -> Result<Playlist, PlaylistError>;

    async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError>;

    async fn list(&self, limit: i64) -> Result<Vec<Playlist>, PlaylistError>;

    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Playlist>, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `OwnerNotFound` - New owner does not exist
    async fn update(&self, playlist: Playlist) -> Result<Playlist, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    async fn delete(&self, id: &PlaylistId) -> Result<Playlist, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `TrackNotFound` - Track does not exist
    /// * `TrackAlreadyInPlaylist` - Track is already a member
    async fn add_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrack, PlaylistError>;

    async fn list_tracks(&self, playlist_id: &PlaylistId)
        -> Result<Vec<PlaylistTrack>, PlaylistError>;

    /// # Returns
    /// The removed membership, or None if the track was not in the playlist
    async fn remove_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<Option<PlaylistTrack>, PlaylistError>;
}
