// tests/support/mocks/article_store.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kiji_core::domain::admin::{Admin, AdminId, AdminRepository};
use kiji_core::domain::article::{
    Article, ArticleChanges, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRecord,
    ArticleTitle, ArticleWriteRepository, BrowseCount, NewArticle, Pagination,
};
use kiji_core::domain::category::{Category, CategoryId, CategoryRepository};
use kiji_core::domain::comment::CommentRepository;
use kiji_core::domain::errors::{DomainError, DomainResult};

/// 記事・管理者・カテゴリ・コメントをまとめて保持するインメモリストア
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<HashMap<i64, Article>>,
    next_id: Mutex<i64>,
    admins: Mutex<HashMap<i64, Admin>>,
    categories: Mutex<HashMap<i64, Category>>,
    comments: Mutex<HashMap<i64, u64>>,
    fail_writes: Mutex<bool>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin(self, id: i64, nickname: &str) -> Self {
        self.admins.lock().unwrap().insert(
            id,
            Admin {
                id: AdminId::new(id).unwrap(),
                nickname: nickname.to_string(),
                email: format!("{nickname}@example.com"),
            },
        );
        self
    }

    pub fn with_category(self, id: i64, name: &str) -> Self {
        self.categories.lock().unwrap().insert(
            id,
            Category {
                id: CategoryId::new(id).unwrap(),
                name: name.to_string(),
            },
        );
        self
    }

    pub fn add_comments(&self, article_id: i64, count: u64) {
        *self.comments.lock().unwrap().entry(article_id).or_default() += count;
    }

    /// Makes every subsequent write fail with a persistence error.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Raw row lookup that ignores the soft-delete marker.
    pub fn raw(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    fn ensure_writable(&self) -> DomainResult<()> {
        if *self.fail_writes.lock().unwrap() {
            Err(DomainError::Persistence("connection reset".into()))
        } else {
            Ok(())
        }
    }

    fn record_for(&self, article: Article) -> ArticleRecord {
        let admin = article
            .admin_id
            .and_then(|id| self.admins.lock().unwrap().get(&id.0).cloned());
        let category = article
            .category_id
            .and_then(|id| self.categories.lock().unwrap().get(&id.0).cloned());
        ArticleRecord::new(article, admin, category)
    }

    fn title_taken(&self, title: &ArticleTitle, except: Option<ArticleId>) -> bool {
        self.articles.lock().unwrap().values().any(|article| {
            !article.is_deleted()
                && article.title == *title
                && Some(article.id) != except
        })
    }

    fn with_live_article<F>(&self, id: ArticleId, mutate: F) -> DomainResult<Article>
    where
        F: FnOnce(&mut Article),
    {
        self.ensure_writable()?;
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&id.0)
            .filter(|article| !article.is_deleted())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        mutate(article);
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        self.ensure_writable()?;
        if self.title_taken(&new.title, None) {
            return Err(DomainError::Conflict("article already exists".into()));
        }

        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let article = Article {
            id: ArticleId::new(id)?,
            title: new.title,
            description: new.description,
            img_url: new.img_url,
            content: new.content,
            seo_keyword: new.seo_keyword,
            status: new.status,
            sort_order: new.sort_order,
            browse: BrowseCount::default(),
            admin_id: new.admin_id,
            category_id: new.category_id,
            created_at: new.created_at,
            updated_at: new.updated_at,
            deleted_at: None,
        };
        self.articles.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, changes: ArticleChanges) -> DomainResult<Article> {
        if self.title_taken(&changes.title, Some(changes.id)) {
            return Err(DomainError::Conflict("article already exists".into()));
        }
        self.with_live_article(changes.id, |article| article.apply(&changes))
    }

    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<Article> {
        self.with_live_article(id, |article| article.soft_delete(at))
    }

    async fn set_browse(
        &self,
        id: ArticleId,
        browse: BrowseCount,
        at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        self.with_live_article(id, |article| article.set_browse(browse, at))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_active_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        let article = self
            .articles
            .lock()
            .unwrap()
            .get(&id.0)
            .filter(|article| !article.is_deleted())
            .cloned();
        Ok(article.map(|article| self.record_for(article)))
    }

    async fn find_active_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .find(|article| !article.is_deleted() && article.title == *title)
            .cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        pagination: Pagination,
    ) -> DomainResult<(Vec<ArticleRecord>, u64)> {
        let mut matching: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.sort_order
                .cmp(&a.sort_order)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .map(|article| self.record_for(article))
            .collect();

        Ok((page, total))
    }
}

#[async_trait]
impl AdminRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>> {
        Ok(self.admins.lock().unwrap().get(&id.0).cloned())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(&id.0).cloned())
    }
}

#[async_trait]
impl CommentRepository for InMemoryArticleStore {
    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .get(&article_id.0)
            .copied()
            .unwrap_or(0))
    }
}
