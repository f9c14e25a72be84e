use async_trait::async_trait;
use complaint_core_db::models::complaint::ComplaintModel;
use complaint_core_db::repository::find_all::FindAll;
use std::error::Error;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};

impl ComplaintRepositoryImpl {
    pub(super) async fn find_all_impl(
        repo: &ComplaintRepositoryImpl,
    ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaint ORDER BY created_at DESC NULLS LAST, id ASC"
        );
        let rows = sqlx::query(&query).fetch_all(&*repo.pool).await?;
        tracing::debug!(count = rows.len(), "Loaded all complaints");
        Self::rows_to_models(rows)
    }
}

#[async_trait]
impl FindAll<ComplaintModel> for ComplaintRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Self::find_all_impl(self).await
    }
}
