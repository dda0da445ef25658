use async_trait::async_trait;

use crate::author::models::AuthorId;
use crate::track::errors::TrackError;
use crate::track::models::CreateTrackCommand;
use crate::track::models::Track;
use crate::track::models::TrackId;
use crate::track::models::TrackName;
use crate::track::models::UpdateTrackCommand;

/// Port for track catalogue operations.
#[async_trait]
pub trait TrackServicePort: Send + Sync + 'static {
    async fn list_tracks(&self, limit: i64) -> Result<Vec<Track>, TrackError>;

    /// # Errors
    /// * `NotFound` - Track does not exist
    async fn get_track(&self, id: &TrackId) -> Result<Track, TrackError>;

    /// Tracks by one author; an unknown author simply has none.
    async fn list_tracks_by_author(&self, author_id: &AuthorId) -> Result<Vec<Track>, TrackError>;

    /// # Errors
    /// * `NameAlreadyExists` - Track name is already taken
    /// * `AuthorNotFound` - Referenced author does not exist
    async fn create_track(&self, command: CreateTrackCommand) -> Result<Track, TrackError>;

    /// # Errors
    /// * `NotFound` - Track does not exist
    /// * `NameAlreadyExists` - New name is already taken
    /// * `AuthorNotFound` - New author does not exist
    async fn update_track(
        &self,
        id: &TrackId,
        command: UpdateTrackCommand,
    ) -> Result<Track, TrackError>;

    /// # Errors
    /// * `NotFound` - Track does not exist
    async fn delete_track(&self, id: &TrackId) -> Result<Track, TrackError>;
}

/// Persistence operations for tracks.
///
/// `create` and `update` report a missing author as `AuthorNotFound`.
#[async_trait]
pub trait TrackRepository: Send + Sync + 'static {
    async fn create(&self, command: CreateTrackCommand) -> Result<Track, TrackError>;

    async fn find_by_id(&self, id: &TrackId) -> Result<Option<Track>, TrackError>;

    async fn find_by_name(&self, name: &TrackName) -> Result<Option<Track>, TrackError>;

    async fn list(&self, limit: i64) -> Result<Vec<Track>, TrackError>;

    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Track>, TrackError>;

    async fn update(&self, track: Track) -> Result<Track, TrackError>;

    async fn delete(&self, id: &TrackId) -> Result<Track, TrackError>;
}
