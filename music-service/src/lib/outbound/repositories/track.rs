use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::author::models::AuthorId;
use crate::track::errors::TrackError;
use crate::track::models::CreateTrackCommand;
use crate::track::models::FileName;
use crate::track::models::Track;
use crate::track::models::TrackDuration;
use crate::track::models::TrackId;
use crate::track::models::TrackName;
use crate::track::ports::TrackRepository;

pub struct PostgresTrackRepository {
    pool: PgPool,
}

impl PostgresTrackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_track(row: &PgRow) -> Result<Track, TrackError> {
        Ok(Track {
            id: TrackId(row.try_get("id").map_err(database_error)?),
            name: TrackName::new(row.try_get("name").map_err(database_error)?)?,
            duration: TrackDuration::new(row.try_get("duration").map_err(database_error)?)?,
            author_id: AuthorId(row.try_get("author_id").map_err(database_error)?),
            file_name: FileName::new(row.try_get("file_name").map_err(database_error)?)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> TrackError {
    TrackError::DatabaseError(e.to_string())
}

fn write_error(e: sqlx::Error, name: &TrackName, author_id: AuthorId) -> TrackError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("tracks_name_key") {
            return TrackError::NameAlreadyExists(name.to_string());
        }
        if db_err.is_foreign_key_violation()
            && db_err.constraint() == Some("tracks_author_id_fkey")
        {
            return TrackError::AuthorNotFound(author_id);
        }
    }
    database_error(e)
}

#[async_trait]
impl TrackRepository for PostgresTrackRepository {
    async fn create(&self, command: CreateTrackCommand) -> Result<Track, TrackError> {
        let row = sqlx::query(
            r#"
            INSERT INTO tracks (name, duration, author_id, file_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, duration, author_id, file_name
            "#,
        )
        .bind(command.name.as_str())
        .bind(command.duration.seconds())
        .bind(command.author_id.0)
        .bind(command.file_name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &command.name, command.author_id))?;

        Self::row_to_track(&row)
    }

    async fn find_by_id(&self, id: &TrackId) -> Result<Option<Track>, TrackError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, duration, author_id, file_name
            FROM tracks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_track).transpose()
    }

    async fn find_by_name(&self, name: &TrackName) -> Result<Option<Track>, TrackError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, duration, author_id, file_name
            FROM tracks
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_track).transpose()
    }

    async fn list(&self, limit: i64) -> Result<Vec<Track>, TrackError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, duration, author_id, file_name
            FROM tracks
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_track).collect()
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Track>, TrackError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, duration, author_id, file_name
            FROM tracks
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_track).collect()
    }

    async fn update(&self, track: Track) -> Result<Track, TrackError> {
        let row = sqlx::query(
            r#"
            UPDATE tracks
            SET name = $2, duration = $3, author_id = $4, file_name = $5
            WHERE id = $1
            RETURNING id, name, duration, author_id, file_name
            "#,
        )
        .bind(track.id.0)
        .bind(track.name.as_str())
        .bind(track.duration.seconds())
        .bind(track.author_id.0)
        .bind(track.file_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &track.name, track.author_id))?;

        match row {
            Some(r) => Self::row_to_track(&r),
            None => Err(TrackError::NotFound(track.id)),
        }
    }

    async fn delete(&self, id: &TrackId) -> Result<Track, TrackError> {
        let row = sqlx::query(
            r#"
            DELETE FROM tracks
            WHERE id = $1
            RETURNING id, name, duration, author_id, file_name
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(r) => Self::row_to_track(&r),
            None => Err(TrackError::NotFound(*id)),
        }
    }
}
