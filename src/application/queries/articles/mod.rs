mod detail;
mod list;
mod service;

pub use detail::ArticleDetailQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
