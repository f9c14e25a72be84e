use async_trait::async_trait;
use complaint_core_db::repository::delete_by_id::DeleteById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &ComplaintRepositoryImpl,
        id: Uuid,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM complaint WHERE id = $1")
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        tracing::debug!(complaint_id = %id, deleted = result.rows_affected(), "Deleted complaint");
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl DeleteById for ComplaintRepositoryImpl {
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::delete_by_id_impl(self, id).await
    }
}
