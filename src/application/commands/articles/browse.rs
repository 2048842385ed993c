// src/application/commands/articles/browse.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, BrowseCount},
};

pub struct UpdateBrowseCommand {
    pub id: i64,
    /// Absolute value to store, not an increment.
    pub browse: i64,
}

impl ArticleCommandService {
    pub async fn update_browse(&self, command: UpdateBrowseCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let browse = BrowseCount::new(command.browse)?;
        let record = self
            .read_repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let updated = self
            .write_repo
            .set_browse(id, browse, self.clock.now())
            .await?;
        tracing::debug!(article_id = %id, browse = browse.value(), "browse count set");
        Ok(ArticleDto::from_parts(updated, record.admin, record.category))
    }
}
