// tests/support/builders.rs
use std::sync::Arc;

use super::mocks::InMemoryArticleStore;
use kiji_core::application::commands::articles::CreateArticleCommand;

pub const ADMIN_ID: i64 = 1;
pub const CATEGORY_ID: i64 = 2;

/// 管理者 1 件とカテゴリ 1 件を登録済みのストア
pub fn seeded_store() -> Arc<InMemoryArticleStore> {
    Arc::new(
        InMemoryArticleStore::new()
            .with_admin(ADMIN_ID, "alice")
            .with_category(CATEGORY_ID, "rust"),
    )
}

pub fn create_command(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .description("short description")
        .img_url("https://img.example/cover.png")
        .content(format!("body of {title}"))
        .seo_keyword("cms")
        .admin_id(ADMIN_ID)
        .category_id(CATEGORY_ID)
        .build()
        .expect("title is set")
}
