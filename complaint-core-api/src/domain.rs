use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ComplaintError;

/// Minimum number of characters a complaint body must have after trimming.
pub const MIN_COMPLAINT_LENGTH: usize = 10;

/// Verified caller identity, as issued by an identity provider and carried by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl Identity {
    pub fn user(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            is_admin: false,
        }
    }

    pub fn admin(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            is_admin: true,
        }
    }

    /// Name shown on submitted complaints. Falls back to the local part of the email.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if !name.is_empty() {
            return name;
        }
        match self.email.split_once('@') {
            Some((local, _)) if !local.is_empty() => local,
            _ => &self.email,
        }
    }
}

/// Resolution state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ComplaintStatus::Resolved)
    }

    pub fn from_resolved(resolved: bool) -> Self {
        if resolved {
            ComplaintStatus::Resolved
        } else {
            ComplaintStatus::Pending
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = ComplaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ComplaintStatus::Pending),
            "resolved" => Ok(ComplaintStatus::Resolved),
            _ => Err(ComplaintError::InvalidInput(format!(
                "Unknown complaint status: {s}"
            ))),
        }
    }
}

/// A complaint as returned to callers, with every legacy field already defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: Uuid,
    pub owner_email: String,
    /// Display name snapshot taken at submission time
    pub owner_name: String,
    pub text: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status_updated_at: Option<DateTime<Utc>>,
    /// Email of the admin who resolved the complaint; `None` while pending
    pub resolved_by: Option<String>,
}

impl Complaint {
    pub fn status(&self) -> ComplaintStatus {
        ComplaintStatus::from_resolved(self.resolved)
    }
}
