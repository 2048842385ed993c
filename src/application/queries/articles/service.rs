use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, ListingPolicy},
    comment::CommentRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) listing_policy: ListingPolicy,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        listing_policy: ListingPolicy,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            listing_policy,
        }
    }
}
