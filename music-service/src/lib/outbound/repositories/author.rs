use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::author::models::AuthorId;
use crate::author::models::Nickname;
use crate::author::ports::AuthorRepository;

pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_author(row: &PgRow) -> Result<Author, AuthorError> {
        Ok(Author {
            id: AuthorId(row.try_get("id").map_err(database_error)?),
            nickname: Nickname::new(row.try_get("nickname").map_err(database_error)?)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> AuthorError {
    AuthorError::DatabaseError(e.to_string())
}

fn write_error(e: sqlx::Error, nickname: &Nickname) -> AuthorError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("authors_nickname_key") {
            return AuthorError::NicknameAlreadyExists(nickname.to_string());
        }
    }
    database_error(e)
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn create(&self, nickname: Nickname) -> Result<Author, AuthorError> {
        let row = sqlx::query(
            r#"
            INSERT INTO authors (nickname)
            VALUES ($1)
            RETURNING id, nickname
            "#,
        )
        .bind(nickname.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &nickname))?;

        Self::row_to_author(&row)
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        let row = sqlx::query("SELECT id, nickname FROM authors WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_author).transpose()
    }

    async fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Author>, AuthorError> {
        let row = sqlx::query("SELECT id, nickname FROM authors WHERE nickname = $1")
            .bind(nickname.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_author).transpose()
    }

    async fn list(&self, limit: i64) -> Result<Vec<Author>, AuthorError> {
        let rows = sqlx::query("SELECT id, nickname FROM authors ORDER BY id LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.iter().map(Self::row_to_author).collect()
    }

    async fn update(&self, author: Author) -> Result<Author, AuthorError> {
        let row = sqlx::query(
            r#"
            UPDATE authors
            SET nickname = $2
            WHERE id = $1
            RETURNING id, nickname
            "#,
        )
        .bind(author.id.0)
        .bind(author.nickname.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &author.nickname))?;

        match row {
            Some(r) => Self::row_to_author(&r),
            None => Err(AuthorError::NotFound(author.id)),
        }
    }

    async fn delete(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        let row = sqlx::query("DELETE FROM authors WHERE id = $1 RETURNING id, nickname")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        match row {
            Some(r) => Self::row_to_author(&r),
            None => Err(AuthorError::NotFound(*id)),
        }
    }
}
