use chrono::{DateTime, Utc};
use complaint_core_api::{Complaint, ComplaintStatus};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Limits in characters, matching the `VARCHAR` columns.
pub const EMAIL_MAX_LEN: usize = 254;
pub const NAME_MAX_LEN: usize = 100;

/// Buffer capacities in bytes: a UTF-8 character takes at most four.
pub const EMAIL_CAPACITY: usize = 4 * EMAIL_MAX_LEN;
pub const NAME_CAPACITY: usize = 4 * NAME_MAX_LEN;

pub type EmailString = HeaplessString<EMAIL_CAPACITY>;
pub type NameString = HeaplessString<NAME_CAPACITY>;

/// Complaint as persisted.
///
/// `resolved`, `created_at` and `updated_at` are nullable because records
/// written before those fields existed may lack them. Use [`project_complaint`]
/// to obtain the defaulted view; the stored record is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintModel {
    pub id: Uuid,
    pub owner_email: EmailString,
    pub owner_name: NameString,
    pub text: String,
    pub resolved: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status_updated_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<EmailString>,
}

impl Identifiable for ComplaintModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl ComplaintModel {
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email.as_str() == email
    }
}

/// Read-time compatibility shim for legacy records.
///
/// Missing `resolved` reads as `false`, a missing `created_at` reads as `now`
/// and a missing `updated_at` reads as the (possibly defaulted) `created_at`.
pub fn project_complaint(model: &ComplaintModel, now: DateTime<Utc>) -> Complaint {
    let created_at = model.created_at.unwrap_or(now);
    Complaint {
        id: model.id,
        owner_email: model.owner_email.to_string(),
        owner_name: model.owner_name.to_string(),
        text: model.text.clone(),
        resolved: model.resolved.unwrap_or(false),
        created_at,
        updated_at: model.updated_at.unwrap_or(created_at),
        status_updated_at: model.status_updated_at,
        resolved_by: model.resolved_by.as_ref().map(|s| s.to_string()),
    }
}

/// Listing order: newest `created_at` first, records without one last, ties broken by id.
pub fn newest_first(a: &ComplaintModel, b: &ComplaintModel) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id.cmp(&b.id))
}

/// Complaint about to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComplaintModel {
    pub owner_email: EmailString,
    pub owner_name: NameString,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewComplaintModel {
    pub fn new(owner_email: EmailString, owner_name: NameString, text: String, now: DateTime<Utc>) -> Self {
        Self {
            owner_email,
            owner_name,
            text,
            created_at: now,
        }
    }

    /// Fresh record: pending, never resolved, `updated_at == created_at`.
    pub fn into_model(self, id: Uuid) -> ComplaintModel {
        ComplaintModel {
            id,
            owner_email: self.owner_email,
            owner_name: self.owner_name,
            text: self.text,
            resolved: Some(false),
            created_at: Some(self.created_at),
            updated_at: Some(self.created_at),
            status_updated_at: None,
            resolved_by: None,
        }
    }
}

/// Partial update of a complaint. `None` leaves a field untouched.
///
/// `resolved_by` is doubly optional: `Some(None)` clears the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintPatch {
    pub text: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub resolved: Option<bool>,
    pub status_updated_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<Option<EmailString>>,
}

impl ComplaintPatch {
    pub fn text(text: String, now: DateTime<Utc>) -> Self {
        Self {
            text: Some(text),
            updated_at: Some(now),
            ..Default::default()
        }
    }

    /// Resolving records the acting admin; reopening clears the resolver.
    pub fn status(status: ComplaintStatus, admin_email: EmailString, now: DateTime<Utc>) -> Self {
        let resolved = status.is_resolved();
        Self {
            resolved: Some(resolved),
            status_updated_at: Some(now),
            resolved_by: Some(resolved.then_some(admin_email)),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.updated_at.is_none()
            && self.resolved.is_none()
            && self.status_updated_at.is_none()
            && self.resolved_by.is_none()
    }

    /// Whether applying the patch changes any field besides the `updated_at` touch field.
    pub fn is_effective_for(&self, model: &ComplaintModel) -> bool {
        let text = self.text.as_ref().is_some_and(|t| *t != model.text);
        let resolved = self.resolved.is_some_and(|r| Some(r) != model.resolved);
        let status_updated_at = self
            .status_updated_at
            .is_some_and(|t| Some(t) != model.status_updated_at);
        let resolved_by = self
            .resolved_by
            .as_ref()
            .is_some_and(|r| *r != model.resolved_by);
        text || resolved || status_updated_at || resolved_by
    }

    pub fn apply_to(&self, model: &mut ComplaintModel) {
        if let Some(text) = &self.text {
            model.text = text.clone();
        }
        if let Some(updated_at) = self.updated_at {
            model.updated_at = Some(updated_at);
        }
        if let Some(resolved) = self.resolved {
            model.resolved = Some(resolved);
        }
        if let Some(status_updated_at) = self.status_updated_at {
            model.status_updated_at = Some(status_updated_at);
        }
        if let Some(resolved_by) = &self.resolved_by {
            model.resolved_by = resolved_by.clone();
        }
    }
}
