use std::sync::Arc;

use async_trait::async_trait;

use crate::playlist::errors::PlaylistError;
use crate::playlist::models::CreatePlaylistCommand;
use crate::playlist::models::Playlist;
use crate::playlist::models::PlaylistId;
use crate::playlist::models::PlaylistTrack;
use crate::playlist::models::UpdatePlaylistCommand;
use crate::playlist::ports::PlaylistRepository;
use crate::playlist::ports::PlaylistServicePort;
use crate::track::models::TrackId;
use crate::user::models::UserId;

pub struct PlaylistService<PR>
where
    PR: PlaylistRepository,
{
    repository: Arc<PR>,
}

impl<PR> PlaylistService<PR>
where
    PR: PlaylistRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PlaylistServicePort for PlaylistService<PR>
where
    PR: PlaylistRepository,
{
    async fn list_playlists(&self, limit: i64) -> Result<Vec<Playlist>, PlaylistError> {
        self.repository.list(limit).await
    }

    async fn get_playlist(&self, id: &PlaylistId) -> Result<Playlist, PlaylistError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PlaylistError::NotFound(*id))
    }

    async fn list_user_playlists(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Playlist>, PlaylistError> {
        self.repository.list_by_user(user_id, limit).await
    }

    async fn create_playlist(
        &self,
        command: CreatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError> {
        let playlist = self.repository.create(command).await?;
        tracing::info!(
            playlist_id = %playlist.id,
            user_id = %playlist.user_id,
            "Playlist created"
        );

        Ok(playlist)
    }

    async fn update_playlist(
        &self,
        id: &PlaylistId,
        command: UpdatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError> {
        let mut playlist = self.get_playlist(id).await?;

        if let Some(name) = command.name {
            playlist.name = name;
        }
        if let Some(user_id) = command.user_id {
            playlist.user_id = user_id;
        }

        self.repository.update(playlist).await
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<Playlist, PlaylistError> {
        let playlist = self.repository.delete(id).await?;
        tracing::info!(playlist_id = %playlist.id, "Playlist deleted");

        Ok(playlist)
    }

    async fn add_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrack, PlaylistError> {
        // Missing playlist is a 404 on the path, not a bad reference in the body
        self.get_playlist(playlist_id).await?;

        let link = self.repository.add_track(playlist_id, track_id).await?;
        tracing::debug!(%playlist_id, %track_id, "Track added to playlist");

        Ok(link)
    }

    async fn list_tracks(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<PlaylistTrack>, PlaylistError> {
        self.repository.list_tracks(playlist_id).await
    }

    async fn remove_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrack, PlaylistError> {
        self.repository
            .remove_track(playlist_id, track_id)
            .await?
            .ok_or(PlaylistError::LinkNotFound {
                playlist_id: *playlist_id,
                track_id: *track_id,
            })
    }
}
