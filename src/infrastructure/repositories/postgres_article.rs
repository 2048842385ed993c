// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::admin::{Admin, AdminId};
use crate::domain::article::{
    Article, ArticleChanges, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRecord,
    ArticleStatus, ArticleTitle, ArticleWriteRepository, BrowseCount, NewArticle, Pagination,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, description, img_url, content, seo_keyword, status, \
     sort_order, browse, admin_id, category_id, created_at, updated_at, deleted_at";

const RECORD_SELECT: &str = "SELECT a.id, a.title, a.description, a.img_url, a.content, \
     a.seo_keyword, a.status, a.sort_order, a.browse, a.admin_id, a.category_id, \
     a.created_at, a.updated_at, a.deleted_at, \
     ad.nickname AS admin_nickname, ad.email AS admin_email, c.name AS category_name \
     FROM articles a \
     LEFT JOIN admins ad ON ad.id = a.admin_id AND ad.deleted_at IS NULL \
     LEFT JOIN categories c ON c.id = a.category_id AND c.deleted_at IS NULL";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: String,
    img_url: String,
    content: String,
    seo_keyword: String,
    status: i16,
    sort_order: i32,
    browse: i64,
    admin_id: Option<i64>,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
struct ArticleRecordRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    admin_nickname: Option<String>,
    admin_email: Option<String>,
    category_name: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            description: row.description,
            img_url: row.img_url,
            content: row.content,
            seo_keyword: row.seo_keyword,
            status: ArticleStatus::new(row.status)?,
            sort_order: row.sort_order,
            browse: BrowseCount::new(row.browse)?,
            admin_id: row.admin_id.map(AdminId::new).transpose()?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

impl TryFrom<ArticleRecordRow> for ArticleRecord {
    type Error = DomainError;

    fn try_from(row: ArticleRecordRow) -> Result<Self, Self::Error> {
        let ArticleRecordRow {
            article,
            admin_nickname,
            admin_email,
            category_name,
        } = row;
        let article = Article::try_from(article)?;

        // LEFT JOIN: relation columns are NULL when the referenced row is gone
        let admin = match (article.admin_id, admin_nickname) {
            (Some(id), Some(nickname)) => Some(Admin {
                id,
                nickname,
                email: admin_email.unwrap_or_default(),
            }),
            _ => None,
        };
        let category = match (article.category_id, category_name) {
            (Some(id), Some(name)) => Some(Category { id, name }),
            _ => None,
        };

        Ok(ArticleRecord::new(article, admin, category))
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            img_url,
            content,
            seo_keyword,
            status,
            sort_order,
            admin_id,
            category_id,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, description, img_url, content, seo_keyword, status, \
             sort_order, admin_id, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(String::from(title))
            .bind(description)
            .bind(img_url)
            .bind(content)
            .bind(seo_keyword)
            .bind(i16::from(status))
            .bind(sort_order)
            .bind(admin_id.map(i64::from))
            .bind(category_id.map(i64::from))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, changes: ArticleChanges) -> DomainResult<Article> {
        let ArticleChanges {
            id,
            title,
            description,
            img_url,
            content,
            seo_keyword,
            status,
            sort_order,
            admin_id,
            category_id,
            updated_at,
        } = changes;

        // unresolved references keep their current value
        let sql = format!(
            "UPDATE articles SET title = $1, description = $2, img_url = $3, content = $4,
             seo_keyword = $5, status = $6, sort_order = $7,
             admin_id = COALESCE($8, admin_id), category_id = COALESCE($9, category_id),
             updated_at = $10
             WHERE id = $11 AND deleted_at IS NULL
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(String::from(title))
            .bind(description)
            .bind(img_url)
            .bind(content)
            .bind(seo_keyword)
            .bind(i16::from(status))
            .bind(sort_order)
            .bind(admin_id.map(i64::from))
            .bind(category_id.map(i64::from))
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<Article> {
        let sql = format!(
            "UPDATE articles SET deleted_at = $1, updated_at = $1
             WHERE id = $2 AND deleted_at IS NULL
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn set_browse(
        &self,
        id: ArticleId,
        browse: BrowseCount,
        at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let sql = format!(
            "UPDATE articles SET browse = $1, updated_at = $2
             WHERE id = $3 AND deleted_at IS NULL
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(browse))
            .bind(at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE a.deleted_at IS NULL");

        if let Some(status) = filter.status {
            builder.push(" AND a.status = ");
            builder.push_bind(i16::from(status));
        }

        if let Some(category_id) = filter.category_id {
            builder.push(" AND a.category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(pattern) = filter.keyword_pattern() {
            builder.push(" AND (a.content LIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.title LIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    async fn count_matching(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total).map_err(|_| DomainError::Persistence("negative row count".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_active_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        let sql = format!("{RECORD_SELECT} WHERE a.id = $1 AND a.deleted_at IS NULL");

        let row = sqlx::query_as::<_, ArticleRecordRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleRecord::try_from).transpose()
    }

    async fn find_active_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE title = $1 AND deleted_at IS NULL"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        pagination: Pagination,
    ) -> DomainResult<(Vec<ArticleRecord>, u64)> {
        let total = self.count_matching(filter).await?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY a.sort_order DESC, a.created_at DESC, a.id DESC");
        builder.push(" LIMIT ");
        builder.push_bind(i64::try_from(pagination.limit()).unwrap_or(i64::MAX));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(pagination.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let records = rows
            .into_iter()
            .map(ArticleRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, total))
    }
}
