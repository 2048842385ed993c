// src/domain/admin.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdminId(pub i64);

impl AdminId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("admin id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AdminId> for i64 {
    fn from(value: AdminId) -> Self {
        value.0
    }
}

/// Author metadata attached to articles. Read-only from this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: AdminId,
    pub nickname: String,
    pub email: String,
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>>;
}
