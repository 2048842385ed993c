// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, ports::time::Clock,
        queries::articles::ArticleQueryService,
    },
    domain::{
        admin::AdminRepository,
        article::{ArticleReadRepository, ArticleWriteRepository, ListingPolicy},
        category::CategoryRepository,
        comment::CommentRepository,
    },
};

/// Ports the article services are wired against.
#[derive(Clone)]
pub struct ArticlePorts {
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub admin_repo: Arc<dyn AdminRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(ports: ArticlePorts, listing_policy: ListingPolicy) -> Self {
        let ArticlePorts {
            article_write_repo,
            article_read_repo,
            admin_repo,
            category_repo,
            comment_repo,
            clock,
        } = ports;

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            admin_repo,
            category_repo,
            clock,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            comment_repo,
            listing_policy,
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
