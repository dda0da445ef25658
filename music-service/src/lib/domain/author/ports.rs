use async_trait::async_trait;

use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::author::models::AuthorId;
use crate::author::models::CreateAuthorCommand;
use crate::author::models::Nickname;
use crate::author::models::UpdateAuthorCommand;

/// Port for author catalogue operations.
#[async_trait]
pub trait AuthorServicePort: Send + Sync + 'static {
    async fn list_authors(&self, limit: i64) -> Result<Vec<Author>, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    /// # Errors
    /// * `NicknameAlreadyExists` - Nickname is already taken
    async fn create_author(&self, command: CreateAuthorCommand) -> Result<Author, AuthorError>;

    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `NicknameAlreadyExists` - New nickname is already taken
    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Author, AuthorError>;

    /// Delete an author and, with it, all of its tracks.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn delete_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;
}

/// Persistence operations for authors.
#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    async fn create(&self, nickname: Nickname) -> Result<Author, AuthorError>;

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;

    async fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Author>, AuthorError>;

    async fn list(&self, limit: i64) -> Result<Vec<Author>, AuthorError>;

    async fn update(&self, author: Author) -> Result<Author, AuthorError>;

    async fn delete(&self, id: &AuthorId) -> Result<Author, AuthorError>;
}
