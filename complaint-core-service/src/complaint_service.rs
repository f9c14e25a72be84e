use async_trait::async_trait;
use chrono::Utc;
use complaint_core_api::{
    validate_complaint_text, Complaint, ComplaintError, ComplaintResult, ComplaintService, ComplaintStatus,
    Identity,
};
use complaint_core_db::models::complaint::{
    project_complaint, ComplaintModel, ComplaintPatch, NewComplaintModel, EMAIL_MAX_LEN, NAME_MAX_LEN,
};
use complaint_core_db::repository::{parse_complaint_id, ComplaintRepository};
use complaint_core_db::utils::to_heapless;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::authorization::{can_modify, can_submit, can_toggle_status, can_view};

/// Stateless complaint service over any [`ComplaintRepository`].
pub struct ComplaintServiceImpl<R: ComplaintRepository> {
    repository: Arc<R>,
}

impl<R: ComplaintRepository> ComplaintServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Load a complaint the caller is allowed to edit or delete.
    async fn load_for_modification(
        &self,
        identity: &Identity,
        complaint_id: &str,
    ) -> ComplaintResult<ComplaintModel> {
        let id = parse_complaint_id(complaint_id)?;
        let complaint = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("find_by_id", e))?
            .ok_or_else(not_found)?;

        if !can_modify(identity, &complaint) {
            tracing::warn!(complaint_id = %id, email = %identity.email, "Modification denied");
            return Err(ComplaintError::Forbidden("Permission denied".to_string()));
        }
        Ok(complaint)
    }

    /// Explains an update that modified nothing: the record may have been
    /// deleted after it was loaded.
    async fn unmodified(&self, id: Uuid) -> ComplaintError {
        match self.repository.find_by_id(id).await {
            Ok(Some(_)) => ComplaintError::NoChange("No changes made".to_string()),
            Ok(None) => not_found(),
            Err(e) => store_failure("find_by_id", e),
        }
    }
}

fn require_identity(identity: Option<&Identity>) -> ComplaintResult<&Identity> {
    identity.ok_or(ComplaintError::Unauthenticated)
}

/// Returns the trimmed text if it satisfies the minimum length.
fn validated_text(text: &str) -> ComplaintResult<&str> {
    validate_complaint_text(text).map_err(|e| {
        ComplaintError::InvalidInput(
            e.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid complaint text".to_string()),
        )
    })?;
    Ok(text.trim())
}

fn not_found() -> ComplaintError {
    ComplaintError::NotFound("Complaint not found".to_string())
}

fn store_failure(operation: &str, err: Box<dyn Error + Send + Sync>) -> ComplaintError {
    tracing::error!(operation, error = %err, "Complaint store failure");
    ComplaintError::store(&*err)
}

#[async_trait]
impl<R: ComplaintRepository> ComplaintService for ComplaintServiceImpl<R> {
    async fn list(&self, identity: Option<&Identity>) -> ComplaintResult<Vec<Complaint>> {
        let identity = require_identity(identity)?;

        let records = if identity.is_admin {
            self.repository.find_all().await
        } else {
            self.repository.find_by_owner_email(&identity.email).await
        }
        .map_err(|e| store_failure("list", e))?;

        let now = Utc::now();
        Ok(records
            .iter()
            .filter(|c| can_view(identity, c))
            .map(|c| project_complaint(c, now))
            .collect())
    }

    async fn submit(&self, identity: Option<&Identity>, text: &str) -> ComplaintResult<Complaint> {
        let identity = require_identity(identity)?;
        if !can_submit(identity) {
            return Err(ComplaintError::Forbidden(
                "Admins cannot submit complaints".to_string(),
            ));
        }
        let text = validated_text(text)?;

        let now = Utc::now();
        let new_complaint = NewComplaintModel::new(
            to_heapless(&identity.email, "owner_email", EMAIL_MAX_LEN)?,
            to_heapless(identity.display_name(), "owner_name", NAME_MAX_LEN)?,
            text.to_string(),
            now,
        );

        let saved = self
            .repository
            .insert(new_complaint)
            .await
            .map_err(|e| store_failure("insert", e))?;
        tracing::info!(complaint_id = %saved.id, email = %identity.email, "Complaint submitted");

        Ok(project_complaint(&saved, now))
    }

    async fn edit(
        &self,
        identity: Option<&Identity>,
        complaint_id: &str,
        new_text: &str,
    ) -> ComplaintResult<()> {
        let identity = require_identity(identity)?;
        let text = validated_text(new_text)?;
        let complaint = self.load_for_modification(identity, complaint_id).await?;

        let patch = ComplaintPatch::text(text.to_string(), Utc::now());
        let modified = self
            .repository
            .update_fields(complaint.id, patch)
            .await
            .map_err(|e| store_failure("update_fields", e))?;
        if modified == 0 {
            return Err(self.unmodified(complaint.id).await);
        }

        tracing::info!(complaint_id = %complaint.id, email = %identity.email, "Complaint updated");
        Ok(())
    }

    async fn delete(&self, identity: Option<&Identity>, complaint_id: &str) -> ComplaintResult<()> {
        let identity = require_identity(identity)?;
        let complaint = self.load_for_modification(identity, complaint_id).await?;

        let deleted = self
            .repository
            .delete_by_id(complaint.id)
            .await
            .map_err(|e| store_failure("delete_by_id", e))?;
        if deleted == 0 {
            // Removed by someone else between lookup and delete
            return Err(not_found());
        }

        tracing::info!(complaint_id = %complaint.id, email = %identity.email, "Complaint deleted");
        Ok(())
    }

    async fn toggle_status(
        &self,
        identity: Option<&Identity>,
        complaint_id: &str,
        target_status: &str,
    ) -> ComplaintResult<()> {
        let identity = require_identity(identity)?;
        if !can_toggle_status(identity) {
            tracing::warn!(email = %identity.email, "Status change denied");
            return Err(ComplaintError::Forbidden("Admin access required".to_string()));
        }
        let status: ComplaintStatus = target_status.parse()?;
        let id = parse_complaint_id(complaint_id)?;

        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("find_by_id", e))?
            .ok_or_else(not_found)?;

        let resolver = to_heapless(&identity.email, "resolved_by", EMAIL_MAX_LEN)?;
        let patch = ComplaintPatch::status(status, resolver, Utc::now());
        let modified = self
            .repository
            .update_fields(id, patch)
            .await
            .map_err(|e| store_failure("update_fields", e))?;
        if modified == 0 {
            return Err(self.unmodified(id).await);
        }

        tracing::info!(complaint_id = %id, email = %identity.email, status = %status, "Complaint status changed");
        Ok(())
    }
}
