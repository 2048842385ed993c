// src/domain/article/listing.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
const LEGACY_PER_PAGE: u32 = 10;

/// How listing filters are combined and how `per_page` is reported.
///
/// `Legacy` reproduces the historical behaviour of the listing endpoint, where
/// each filter replaced the previous one (status, then category, then keyword)
/// and `per_page` was always reported as 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingPolicy {
    #[default]
    Conjunctive,
    Legacy,
}

impl ListingPolicy {
    pub fn effective_filter(self, criteria: &ArticleListCriteria) -> ArticleFilter {
        match self {
            Self::Conjunctive => ArticleFilter {
                status: criteria.status,
                category_id: criteria.category_id,
                keyword: criteria.keyword.clone(),
            },
            Self::Legacy => {
                if let Some(keyword) = &criteria.keyword {
                    ArticleFilter {
                        keyword: Some(keyword.clone()),
                        ..ArticleFilter::default()
                    }
                } else if let Some(category_id) = criteria.category_id {
                    ArticleFilter {
                        category_id: Some(category_id),
                        ..ArticleFilter::default()
                    }
                } else {
                    ArticleFilter {
                        status: criteria.status,
                        ..ArticleFilter::default()
                    }
                }
            }
        }
    }

    pub fn reported_per_page(self, pagination: Pagination) -> u32 {
        match self {
            Self::Conjunctive => pagination.page_size(),
            Self::Legacy => LEGACY_PER_PAGE,
        }
    }
}

impl FromStr for ListingPolicy {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "conjunctive" => Ok(Self::Conjunctive),
            "legacy" => Ok(Self::Legacy),
            other => Err(DomainError::validation(format!(
                "unknown listing policy: {other}"
            ))),
        }
    }
}

/// Raw listing criteria as supplied by a caller. Zero ids and blank keywords
/// are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListCriteria {
    pub status: Option<ArticleStatus>,
    pub category_id: Option<CategoryId>,
    pub keyword: Option<String>,
}

impl ArticleListCriteria {
    pub fn from_raw(
        status: Option<i16>,
        category_id: Option<i64>,
        keyword: Option<String>,
    ) -> DomainResult<Self> {
        let status = status
            .filter(|value| *value != 0)
            .map(ArticleStatus::new)
            .transpose()?;
        let category_id = category_id
            .filter(|value| *value != 0)
            .map(CategoryId::new)
            .transpose()?;
        // matched verbatim; only an all-blank keyword counts as absent
        let keyword = keyword.filter(|value| !value.trim().is_empty());

        Ok(Self {
            status,
            category_id,
            keyword,
        })
    }
}

/// Filter applied by repositories: every populated field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub category_id: Option<CategoryId>,
    pub keyword: Option<String>,
}

impl ArticleFilter {
    pub fn keyword_pattern(&self) -> Option<String> {
        self.keyword.as_ref().map(|keyword| format!("%{keyword}%"))
    }

    pub fn matches(&self, article: &Article) -> bool {
        if article.is_deleted() {
            return false;
        }
        let status_ok = self.status.is_none_or(|status| article.status == status);
        let category_ok = self
            .category_id
            .is_none_or(|category_id| article.category_id == Some(category_id));
        let keyword_ok = self.keyword.as_deref().is_none_or(|keyword| {
            article.content.contains(keyword) || article.title.as_str().contains(keyword)
        });
        status_ok && category_ok && keyword_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        let page = page.filter(|value| *value > 0).unwrap_or(1);
        let page_size = page_size
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        Self { page, page_size }
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn page_size(self) -> u32 {
        self.page_size
    }

    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn limit(self) -> u64 {
        u64::from(self.page_size)
    }

    pub fn total_pages(self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.page_size))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}
