use std::sync::Arc;

use async_trait::async_trait;

use crate::author::models::AuthorId;
use crate::track::errors::TrackError;
use crate::track::models::CreateTrackCommand;
use crate::track::models::Track;
use crate::track::models::TrackId;
use crate::track::models::TrackName;
use crate::track::models::UpdateTrackCommand;
use crate::track::ports::TrackRepository;
use crate::track::ports::TrackServicePort;

pub struct TrackService<TR>
where
    TR: TrackRepository,
{
    repository: Arc<TR>,
}

impl<TR> TrackService<TR>
where
    TR: TrackRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn ensure_name_available(
        &self,
        name: &TrackName,
        owner: Option<TrackId>,
    ) -> Result<(), TrackError> {
        match self.repository.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(TrackError::NameAlreadyExists(name.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<TR> TrackServicePort for TrackService<TR>
where
    TR: TrackRepository,
{
    async fn list_tracks(&self, limit: i64) -> Result<Vec<Track>, TrackError> {
        self.repository.list(limit).await
    }

    async fn get_track(&self, id: &TrackId) -> Result<Track, TrackError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TrackError::NotFound(*id))
    }

    async fn list_tracks_by_author(&self, author_id: &AuthorId) -> Result<Vec<Track>, TrackError> {
        self.repository.list_by_author(author_id).await
    }

    async fn create_track(&self, command: CreateTrackCommand) -> Result<Track, TrackError> {
        self.ensure_name_available(&command.name, None).await?;

        let track = self.repository.create(command).await?;
        tracing::info!(
            track_id = %track.id,
            author_id = %track.author_id,
            name = %track.name,
            "Track created"
        );

        Ok(track)
    }

    async fn update_track(
        &self,
        id: &TrackId,
        command: UpdateTrackCommand,
    ) -> Result<Track, TrackError> {
        let mut track = self.get_track(id).await?;

        if let Some(name) = command.name {
            self.ensure_name_available(&name, Some(track.id)).await?;
            track.name = name;
        }
        if let Some(duration) = command.duration {
            track.duration = duration;
        }
        if let Some(author_id) = command.author_id {
            track.author_id = author_id;
        }
        if let Some(file_name) = command.file_name {
            track.file_name = file_name;
        }

        self.repository.update(track).await
    }

    async fn delete_track(&self, id: &TrackId) -> Result<Track, TrackError> {
        let track = self.repository.delete(id).await?;
        tracing::info!(track_id = %track.id, "Track deleted");

        Ok(track)
    }
}
