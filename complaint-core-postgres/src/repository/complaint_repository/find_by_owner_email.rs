use async_trait::async_trait;
use complaint_core_db::models::complaint::ComplaintModel;
use complaint_core_db::repository::find_by_owner_email::FindByOwnerEmail;
use std::error::Error;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};

impl ComplaintRepositoryImpl {
    pub(super) async fn find_by_owner_email_impl(
        repo: &ComplaintRepositoryImpl,
        owner_email: &str,
    ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaint WHERE owner_email = $1 ORDER BY created_at DESC NULLS LAST, id ASC"
        );
        let rows = sqlx::query(&query)
            .bind(owner_email)
            .fetch_all(&*repo.pool)
            .await?;
        Self::rows_to_models(rows)
    }
}

#[async_trait]
impl FindByOwnerEmail<ComplaintModel> for ComplaintRepositoryImpl {
    async fn find_by_owner_email(
        &self,
        owner_email: &str,
    ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_owner_email_impl(self, owner_email).await
    }
}
