// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Soft delete: the row is kept with `deleted_at` set and drops out of
    /// every read path.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let record = self
            .read_repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let deleted = self.write_repo.soft_delete(id, self.clock.now()).await?;
        tracing::info!(article_id = %id, "article soft-deleted");
        Ok(ArticleDto::from_parts(deleted, record.admin, record.category))
    }
}
