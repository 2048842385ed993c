// src/application/commands/articles/references.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        admin::{Admin, AdminId},
        category::{Category, CategoryId},
    },
};

impl ArticleCommandService {
    /// Looks up the author. Missing or non-positive ids resolve to `None`.
    pub(super) async fn resolve_admin(&self, raw: Option<i64>) -> ApplicationResult<Option<Admin>> {
        let Some(id) = raw.and_then(|value| AdminId::new(value).ok()) else {
            return Ok(None);
        };
        let admin = self.admin_repo.find_by_id(id).await?;
        if admin.is_none() {
            tracing::debug!(admin_id = id.0, "admin not found; article left without author");
        }
        Ok(admin)
    }

    pub(super) async fn resolve_category(
        &self,
        raw: Option<i64>,
    ) -> ApplicationResult<Option<Category>> {
        let Some(id) = raw.and_then(|value| CategoryId::new(value).ok()) else {
            return Ok(None);
        };
        let category = self.category_repo.find_by_id(id).await?;
        if category.is_none() {
            tracing::debug!(category_id = id.0, "category not found; article left uncategorised");
        }
        Ok(category)
    }
}
