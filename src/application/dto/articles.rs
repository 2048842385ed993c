use crate::domain::{
    admin::Admin,
    article::{Article, ArticleRecord},
    category::Category,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminSummaryDto {
    pub id: i64,
    pub nickname: String,
    pub email: String,
}

impl From<Admin> for AdminSummaryDto {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id.into(),
            nickname: admin.nickname,
            email: admin.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategorySummaryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub content: String,
    pub seo_keyword: String,
    pub status: i16,
    pub sort_order: i32,
    pub browse: i64,
    #[serde(default)]
    pub admin_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub admin_info: Option<AdminSummaryDto>,
    #[serde(default)]
    pub category_info: Option<CategorySummaryDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ArticleDto {
    pub fn from_parts(
        article: Article,
        admin: Option<Admin>,
        category: Option<Category>,
    ) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            description: article.description,
            img_url: article.img_url,
            content: article.content,
            seo_keyword: article.seo_keyword,
            status: article.status.into(),
            sort_order: article.sort_order,
            browse: article.browse.into(),
            admin_id: article.admin_id.map(Into::into),
            category_id: article.category_id.map(Into::into),
            admin_info: admin.map(Into::into),
            category_info: category.map(Into::into),
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: article.deleted_at,
        }
    }
}

impl From<ArticleRecord> for ArticleDto {
    fn from(record: ArticleRecord) -> Self {
        Self::from_parts(record.article, record.admin, record.category)
    }
}

/// Article detail: the article with its relations plus the number of comments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub comment_count: u64,
    #[serde(flatten)]
    pub article: ArticleDto,
}
