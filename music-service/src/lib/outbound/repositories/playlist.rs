use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::playlist::errors::PlaylistError;
use crate::playlist::models::CreatePlaylistCommand;
use crate::playlist::models::Playlist;
use crate::playlist::models::PlaylistId;
use crate::playlist::models::PlaylistName;
use crate::playlist::models::PlaylistTrack;
use crate::playlist::ports::PlaylistRepository;
use crate::track::models::TrackId;
use crate::user::models::UserId;

pub struct PostgresPlaylistRepository {
    pool: PgPool,
}

impl PostgresPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_playlist(row: &PgRow) -> Result<Playlist, PlaylistError> {
        Ok(Playlist {
            id: PlaylistId(row.try_get("id").map_err(database_error)?),
            name: PlaylistName::new(row.try_get("name").map_err(database_error)?)?,
            user_id: UserId(row.try_get("user_id").map_err(database_error)?),
        })
    }

    fn row_to_link(row: &PgRow) -> Result<PlaylistTrack, PlaylistError> {
        Ok(PlaylistTrack {
            id: row.try_get("id").map_err(database_error)?,
            playlist_id: PlaylistId(row.try_get("playlist_id").map_err(database_error)?),
            track_id: TrackId(row.try_get("track_id").map_err(database_error)?),
        })
    }
}

fn database_error(e: sqlx::Error) -> PlaylistError {
    PlaylistError::DatabaseError(e.to_string())
}

fn owner_error(e: sqlx::Error, user_id: UserId) -> PlaylistError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation()
            && db_err.constraint() == Some("playlists_user_id_fkey")
        {
            return PlaylistError::OwnerNotFound(user_id);
        }
    }
    database_error(e)
}

fn link_error(e: sqlx::Error, playlist_id: PlaylistId, track_id: TrackId) -> PlaylistError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.constraint() {
            Some("playlist_tracks_playlist_id_track_id_key") if db_err.is_unique_violation() => {
                return PlaylistError::TrackAlreadyInPlaylist {
                    playlist_id,
                    track_id,
                };
            }
            Some("playlist_tracks_track_id_fkey") if db_err.is_foreign_key_violation() => {
                return PlaylistError::TrackNotFound(track_id);
            }
            Some("playlist_tracks_playlist_id_fkey") if db_err.is_foreign_key_violation() => {
                return PlaylistError::NotFound(playlist_id);
            }
            _ => {}
        }
    }
    database_error(e)
}

#[async_trait]
impl PlaylistRepository for PostgresPlaylistRepository {
    async fn create(&self, command: CreatePlaylistCommand) -> Result<Playlist, PlaylistError> {
        let row = sqlx::query(
            r#"
            INSERT INTO playlists (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id
            "#,
        )
        .bind(command.name.as_str())
        .bind(command.user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| owner_error(e, command.user_id))?;

        Self::row_to_playlist(&row)
    }

    async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, user_id
            FROM playlists
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_playlist).transpose()
    }

    async fn list(&self, limit: i64) -> Result<Vec<Playlist>, PlaylistError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, user_id
            FROM playlists
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_playlist).collect()
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Playlist>, PlaylistError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, user_id
            FROM playlists
            WHERE user_id = $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(user_id.0)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_playlist).collect()
    }

    async fn update(&self, playlist: Playlist) -> Result<Playlist, PlaylistError> {
        let row = sqlx::query(
            r#"
            UPDATE playlists
            SET name = $2, user_id = $3
            WHERE id = $1
            RETURNING id, name, user_id
            "#,
        )
        .bind(playlist.id.0)
        .bind(playlist.name.as_str())
        .bind(playlist.user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| owner_error(e, playlist.user_id))?;

        match row {
            Some(r) => Self::row_to_playlist(&r),
            None => Err(PlaylistError::NotFound(playlist.id)),
        }
    }

    async fn delete(&self, id: &PlaylistId) -> Result<Playlist, PlaylistError> {
        let row = sqlx::query(
            r#"
            DELETE FROM playlists
            WHERE id = $1
            RETURNING id, name, user_id
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(r) => Self::row_to_playlist(&r),
            None => Err(PlaylistError::NotFound(*id)),
        }
    }

    async fn add_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrack, PlaylistError> {
        let row = sqlx::query(
            r#"
            INSERT INTO playlist_tracks (playlist_id, track_id)
            VALUES ($1, $2)
            RETURNING id, playlist_id, track_id
            "#,
        )
        .bind(playlist_id.0)
        .bind(track_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| link_error(e, *playlist_id, *track_id))?;

        Self::row_to_link(&row)
    }

    async fn list_tracks(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<PlaylistTrack>, PlaylistError> {
        let rows = sqlx::query(
            r#"
            SELECT id, playlist_id, track_id
            FROM playlist_tracks
            WHERE playlist_id = $1
            ORDER BY id
            "#,
        )
        .bind(playlist_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_link).collect()
    }

    async fn remove_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<Option<PlaylistTrack>, PlaylistError> {
        let row = sqlx::query(
            r#"
            DELETE FROM playlist_tracks
            WHERE playlist_id = $1 AND track_id = $2
            RETURNING id, playlist_id, track_id
            "#,
        )
        .bind(playlist_id.0)
        .bind(track_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_link).transpose()
    }
}
