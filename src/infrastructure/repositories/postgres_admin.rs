// src/infrastructure/repositories/postgres_admin.rs
use super::map_sqlx;
use crate::domain::admin::{Admin, AdminId, AdminRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: i64,
    nickname: String,
    email: String,
}

impl TryFrom<AdminRow> for Admin {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Admin {
            id: AdminId::new(row.id)?,
            nickname: row.nickname,
            email: row.email,
        })
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, nickname, email FROM admins WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Admin::try_from).transpose()
    }
}
