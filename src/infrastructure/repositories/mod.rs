// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_admin;
mod postgres_article;
mod postgres_category;
mod postgres_comment;

pub(crate) use error::map_sqlx;
pub use postgres_admin::PostgresAdminRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
