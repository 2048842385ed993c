// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleStatus, ArticleTitle, NewArticle},
};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub content: String,
    pub seo_keyword: String,
    /// `None` or `0` means the default status.
    pub status: Option<i16>,
    pub sort_order: i32,
    pub admin_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: String,
    img_url: String,
    content: String,
    seo_keyword: String,
    status: Option<i16>,
    sort_order: i32,
    admin_id: Option<i64>,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn img_url(mut self, img_url: impl Into<String>) -> Self {
        self.img_url = img_url.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn seo_keyword(mut self, seo_keyword: impl Into<String>) -> Self {
        self.seo_keyword = seo_keyword.into();
        self
    }

    pub fn status(mut self, status: i16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn admin_id(mut self, admin_id: i64) -> Self {
        self.admin_id = Some(admin_id);
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description,
            img_url: self.img_url,
            content: self.content,
            seo_keyword: self.seo_keyword,
            status: self.status,
            sort_order: self.sort_order,
            admin_id: self.admin_id,
            category_id: self.category_id,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;

        if self.read_repo.find_active_by_title(&title).await?.is_some() {
            tracing::warn!(title = %title, "rejecting duplicate article title");
            return Err(ApplicationError::existing("article already exists"));
        }

        let status = command
            .status
            .map(ArticleStatus::new)
            .transpose()?
            .unwrap_or_default();
        let admin = self.resolve_admin(command.admin_id).await?;
        let category = self.resolve_category(command.category_id).await?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            description: command.description,
            img_url: command.img_url,
            content: command.content,
            seo_keyword: command.seo_keyword,
            status,
            sort_order: command.sort_order,
            admin_id: admin.as_ref().map(|admin| admin.id),
            category_id: category.as_ref().map(|category| category.id),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(ArticleDto::from_parts(created, admin, category))
    }
}
