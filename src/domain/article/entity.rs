// src/domain/article/entity.rs
use crate::domain::admin::{Admin, AdminId};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, ArticleTitle, BrowseCount};
use crate::domain::category::{Category, CategoryId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: String,
    pub img_url: String,
    pub content: String,
    pub seo_keyword: String,
    pub status: ArticleStatus,
    pub sort_order: i32,
    pub browse: BrowseCount,
    pub admin_id: Option<AdminId>,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    pub fn set_browse(&mut self, browse: BrowseCount, now: DateTime<Utc>) {
        self.browse = browse;
        self.updated_at = now;
    }

    /// Overwrites every editable field. References that could not be resolved
    /// (`None`) keep whatever the article pointed at before.
    pub fn apply(&mut self, changes: &ArticleChanges) {
        self.title = changes.title.clone();
        self.description = changes.description.clone();
        self.img_url = changes.img_url.clone();
        self.content = changes.content.clone();
        self.seo_keyword = changes.seo_keyword.clone();
        self.status = changes.status;
        self.sort_order = changes.sort_order;
        if let Some(admin_id) = changes.admin_id {
            self.admin_id = Some(admin_id);
        }
        if let Some(category_id) = changes.category_id {
            self.category_id = Some(category_id);
        }
        self.updated_at = changes.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: String,
    pub img_url: String,
    pub content: String,
    pub seo_keyword: String,
    pub status: ArticleStatus,
    pub sort_order: i32,
    pub admin_id: Option<AdminId>,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleChanges {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: String,
    pub img_url: String,
    pub content: String,
    pub seo_keyword: String,
    pub status: ArticleStatus,
    pub sort_order: i32,
    pub admin_id: Option<AdminId>,
    pub category_id: Option<CategoryId>,
    pub updated_at: DateTime<Utc>,
}

/// Article joined with its optional author and category.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub admin: Option<Admin>,
    pub category: Option<Category>,
}

impl ArticleRecord {
    pub fn new(article: Article, admin: Option<Admin>, category: Option<Category>) -> Self {
        Self {
            article,
            admin,
            category,
        }
    }
}
