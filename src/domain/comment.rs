// src/domain/comment.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Comments are owned elsewhere; articles only need the per-article count.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64>;
}
