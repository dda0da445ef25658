use std::sync::Arc;

use async_trait::async_trait;

use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::author::models::AuthorId;
use crate::author::models::CreateAuthorCommand;
use crate::author::models::Nickname;
use crate::author::models::UpdateAuthorCommand;
use crate::author::ports::AuthorRepository;
use crate::author::ports::AuthorServicePort;

pub struct AuthorService<AR>
where
    AR: AuthorRepository,
{
    repository: Arc<AR>,
}

impl<AR> AuthorService<AR>
where
    AR: AuthorRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }

    async fn ensure_nickname_available(
        &self,
        nickname: &Nickname,
        owner: Option<AuthorId>,
    ) -> Result<(), AuthorError> {
        match self.repository.find_by_nickname(nickname).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(AuthorError::NicknameAlreadyExists(nickname.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<AR> AuthorServicePort for AuthorService<AR>
where
    AR: AuthorRepository,
{
    async fn list_authors(&self, limit: i64) -> Result<Vec<Author>, AuthorError> {
        self.repository.list(limit).await
    }

    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound(*id))
    }

    async fn create_author(&self, command: CreateAuthorCommand) -> Result<Author, AuthorError> {
        self.ensure_nickname_available(&command.nickname, None)
            .await?;

        let author = self.repository.create(command.nickname).await?;
        tracing::info!(author_id = %author.id, nickname = %author.nickname, "Author created");

        Ok(author)
    }

    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Author, AuthorError> {
        let mut author = self.get_author(id).await?;

        if let Some(nickname) = command.nickname {
            self.ensure_nickname_available(&nickname, Some(author.id))
                .await?;
            author.nickname = nickname;
        }

        self.repository.update(author).await
    }

    async fn delete_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        let author = self.repository.delete(id).await?;
        tracing::info!(author_id = %author.id, "Author deleted");

        Ok(author)
    }
}
