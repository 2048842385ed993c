use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, OffsetPage, PageMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleListCriteria, Pagination},
};

/// Listing request. Zero and blank values count as "not provided".
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub category_id: Option<i64>,
    pub keyword: Option<String>,
    pub status: Option<i16>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let criteria = ArticleListCriteria::from_raw(query.status, query.category_id, query.keyword)?;
        let pagination = Pagination::new(query.page, query.page_size);
        let filter = self.listing_policy.effective_filter(&criteria);

        let (records, total) = self
            .read_repo
            .list_page(&filter, pagination)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to list articles");
                ApplicationError::from(err)
            })?;

        let meta = PageMeta {
            current_page: pagination.page(),
            per_page: self.listing_policy.reported_per_page(pagination),
            count: total,
            total,
            total_pages: pagination.total_pages(total),
        };
        let data = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(data, meta))
    }
}
