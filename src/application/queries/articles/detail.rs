use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct ArticleDetailQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Loads a live article with its relations and comment count.
    ///
    /// A missing or soft-deleted article is reported as
    /// [`ApplicationError::AuthFailed`].
    pub async fn get_article_detail(
        &self,
        query: ArticleDetailQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::auth_failed("article not found"))?;
        let record = self
            .read_repo
            .find_active_by_id(id)
            .await
            .map_err(|err| {
                tracing::error!(article_id = %id, error = %err, "failed to load article");
                ApplicationError::from(err)
            })?
            .ok_or_else(|| ApplicationError::auth_failed("article not found"))?;

        let comment_count = self
            .comment_repo
            .count_by_article(id)
            .await
            .map_err(|err| {
                tracing::error!(article_id = %id, error = %err, "failed to count comments");
                ApplicationError::from(err)
            })?;

        Ok(ArticleDetailDto {
            comment_count,
            article: record.into(),
        })
    }
}
