use async_trait::async_trait;
use complaint_core_db::models::complaint::{ComplaintModel, NewComplaintModel};
use complaint_core_db::repository::insert::Insert;
use std::error::Error;

use super::repo_impl::{ComplaintRepositoryImpl, COMPLAINT_COLUMNS};
use crate::utils::TryFromRow;

impl ComplaintRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &ComplaintRepositoryImpl,
        item: NewComplaintModel,
    ) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            INSERT INTO complaint
            (owner_email, owner_name, text, resolved, created_at, updated_at, status_updated_at, resolved_by)
            VALUES ($1, $2, $3, FALSE, $4, $4, NULL, NULL)
            RETURNING {COMPLAINT_COLUMNS}
            "#
        );
        let row = sqlx::query(&query)
            .bind(item.owner_email.as_str())
            .bind(item.owner_name.as_str())
            .bind(item.text.as_str())
            .bind(item.created_at)
            .fetch_one(&*repo.pool)
            .await?;

        let saved = ComplaintModel::try_from_row(&row)?;
        tracing::debug!(complaint_id = %saved.id, "Inserted complaint");
        Ok(saved)
    }
}

#[async_trait]
impl Insert<NewComplaintModel, ComplaintModel> for ComplaintRepositoryImpl {
    async fn insert(&self, item: NewComplaintModel) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
        Self::insert_impl(self, item).await
    }
}
