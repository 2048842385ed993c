use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleChanges, ArticleId, ArticleStatus, ArticleTitle},
};

/// Full replacement of an article's editable fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub content: String,
    pub seo_keyword: String,
    pub status: Option<i16>,
    pub sort_order: i32,
    pub admin_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        // non-positive ids can never exist
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let current = self
            .read_repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let title = ArticleTitle::new(command.title)?;
        let taken_elsewhere = self
            .read_repo
            .find_active_by_title(&title)
            .await?
            .is_some_and(|existing| existing.id != id);
        if taken_elsewhere {
            tracing::warn!(article_id = %id, title = %title, "title belongs to another article");
            return Err(ApplicationError::existing("article already exists"));
        }

        let status = command
            .status
            .map(ArticleStatus::new)
            .transpose()?
            .unwrap_or_default();
        let admin = self.resolve_admin(command.admin_id).await?;
        let category = self.resolve_category(command.category_id).await?;

        let changes = ArticleChanges {
            id,
            title,
            description: command.description,
            img_url: command.img_url,
            content: command.content,
            seo_keyword: command.seo_keyword,
            status,
            sort_order: command.sort_order,
            admin_id: admin.as_ref().map(|admin| admin.id),
            category_id: category.as_ref().map(|category| category.id),
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(changes).await?;
        tracing::info!(article_id = %updated.id, "article updated");

        // unresolved references keep the previous relation
        let admin = admin.or(current.admin);
        let category = category.or(current.category);
        Ok(ArticleDto::from_parts(updated, admin, category))
    }
}
