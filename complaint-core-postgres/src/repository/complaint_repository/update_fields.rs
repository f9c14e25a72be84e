use async_trait::async_trait;
use complaint_core_db::models::complaint::ComplaintPatch;
use complaint_core_db::repository::update_fields::UpdateFields;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ComplaintRepositoryImpl;

impl ComplaintRepositoryImpl {
    /// Builds `UPDATE complaint SET .. WHERE id = $n AND (<any field differs>)`.
    ///
    /// The guard leaves out `updated_at`, so a patch whose other fields already
    /// match the stored row affects zero rows.
    pub(super) fn build_update_query(id: Uuid, patch: &ComplaintPatch) -> Option<QueryBuilder<'static, Postgres>> {
        let resolved_by = patch
            .resolved_by
            .as_ref()
            .map(|r| r.as_ref().map(|s| s.to_string()));

        let has_guard = patch.text.is_some()
            || patch.resolved.is_some()
            || patch.status_updated_at.is_some()
            || resolved_by.is_some();
        if !has_guard {
            // Empty, or only the touch field: nothing can be effective.
            return None;
        }

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE complaint SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(text) = &patch.text {
                set.push("text = ").push_bind_unseparated(text.clone());
            }
            if let Some(updated_at) = patch.updated_at {
                set.push("updated_at = ").push_bind_unseparated(updated_at);
            }
            if let Some(resolved) = patch.resolved {
                set.push("resolved = ").push_bind_unseparated(resolved);
            }
            if let Some(status_updated_at) = patch.status_updated_at {
                set.push("status_updated_at = ").push_bind_unseparated(status_updated_at);
            }
            if let Some(resolved_by) = &resolved_by {
                set.push("resolved_by = ").push_bind_unseparated(resolved_by.clone());
            }
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" AND (");
        {
            let mut guard = qb.separated(" OR ");
            if let Some(text) = &patch.text {
                guard.push("text IS DISTINCT FROM ").push_bind_unseparated(text.clone());
            }
            if let Some(resolved) = patch.resolved {
                guard.push("resolved IS DISTINCT FROM ").push_bind_unseparated(resolved);
            }
            if let Some(status_updated_at) = patch.status_updated_at {
                guard
                    .push("status_updated_at IS DISTINCT FROM ")
                    .push_bind_unseparated(status_updated_at);
            }
            if let Some(resolved_by) = resolved_by {
                guard
                    .push("resolved_by IS DISTINCT FROM ")
                    .push_bind_unseparated(resolved_by);
            }
        }
        qb.push(")");

        Some(qb)
    }

    pub(super) async fn update_fields_impl(
        repo: &ComplaintRepositoryImpl,
        id: Uuid,
        patch: ComplaintPatch,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let Some(mut qb) = Self::build_update_query(id, &patch) else {
            return Ok(0);
        };

        let result = qb.build().execute(&*repo.pool).await?;
        tracing::debug!(complaint_id = %id, modified = result.rows_affected(), "Updated complaint");
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UpdateFields<ComplaintPatch> for ComplaintRepositoryImpl {
    async fn update_fields(
        &self,
        id: Uuid,
        patch: ComplaintPatch,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::update_fields_impl(self, id, patch).await
    }
}
