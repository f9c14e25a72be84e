use sqlx::PgPool;
use std::sync::Arc;

use crate::config::PostgresConfig;
use crate::repository::complaint_repository::ComplaintRepositoryImpl;

/// Entry point for building Postgres-backed repositories over one pool.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        let pool = config.connect().await?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn create_complaint_repository(&self) -> Arc<ComplaintRepositoryImpl> {
        Arc::new(ComplaintRepositoryImpl::new(self.pool.clone()))
    }
}
