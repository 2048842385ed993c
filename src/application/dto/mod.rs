pub mod articles;
pub mod pagination;
pub mod serde_time;

pub use articles::{AdminSummaryDto, ArticleDetailDto, ArticleDto, CategorySummaryDto};
pub use pagination::{OffsetPage, PageMeta};
