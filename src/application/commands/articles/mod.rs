// src/application/commands/articles/mod.rs
mod browse;
mod create;
mod delete;
mod references;
mod service;
mod update;

pub use browse::UpdateBrowseCommand;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
