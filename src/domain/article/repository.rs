// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleChanges, ArticleRecord, NewArticle};
use crate::domain::article::listing::{ArticleFilter, Pagination};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, BrowseCount};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, changes: ArticleChanges) -> DomainResult<Article>;
    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<Article>;
    async fn set_browse(
        &self,
        id: ArticleId,
        browse: BrowseCount,
        at: DateTime<Utc>,
    ) -> DomainResult<Article>;
}

/// Read side. Every lookup here ignores soft-deleted rows.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_active_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>>;
    async fn find_active_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>>;
    /// Returns one page of matching rows plus the total number of matches.
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        pagination: Pagination,
    ) -> DomainResult<(Vec<ArticleRecord>, u64)>;
}
