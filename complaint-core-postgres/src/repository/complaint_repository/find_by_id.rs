use async_trait::async_trait;
use complaint_core_db::models::complaint::ComplaintModel;
use complaint_core_db::repository::find_by_id::FindById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};
use crate::utils::TryFromRow;

impl ComplaintRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ComplaintRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {COMPLAINT_COLUMNS} FROM complaint WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;
        row.as_ref().map(ComplaintModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<ComplaintModel> for ComplaintRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
