// src/domain/article/mod.rs
pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleChanges, ArticleRecord, NewArticle};
pub use listing::{ArticleFilter, ArticleListCriteria, ListingPolicy, Pagination};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, ArticleStatus, ArticleTitle, BrowseCount};
