use async_trait::async_trait;

use crate::domain::{Complaint, Identity};
use crate::error::ComplaintResult;

/// Complaint lifecycle operations with authorization applied.
///
/// Every method takes the caller's identity explicitly; `None` means the
/// caller has no session and yields `ComplaintError::Unauthenticated`.
/// Implementations hold no per-request state and can be shared behind an `Arc`.
#[async_trait]
pub trait ComplaintService: Send + Sync {
    /// Complaints visible to the caller, newest first.
    ///
    /// Admins see every complaint, other users only their own.
    async fn list(&self, identity: Option<&Identity>) -> ComplaintResult<Vec<Complaint>>;

    /// Create a complaint owned by the caller. Admins may not submit.
    async fn submit(&self, identity: Option<&Identity>, text: &str) -> ComplaintResult<Complaint>;

    /// Replace the text of a complaint. Allowed for its owner and for admins.
    async fn edit(
        &self,
        identity: Option<&Identity>,
        complaint_id: &str,
        new_text: &str,
    ) -> ComplaintResult<()>;

    /// Permanently remove a complaint. Allowed for its owner and for admins.
    async fn delete(&self, identity: Option<&Identity>, complaint_id: &str) -> ComplaintResult<()>;

    /// Move a complaint between `pending` and `resolved`. Admins only.
    async fn toggle_status(
        &self,
        identity: Option<&Identity>,
        complaint_id: &str,
        target_status: &str,
    ) -> ComplaintResult<()>;
}

/// Verifies credentials and issues an identity.
///
/// Credential storage and hashing live behind this trait.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns `Ok(None)` when the email/password pair is not valid.
    async fn verify(&self, email: &str, password: &str) -> ComplaintResult<Option<Identity>>;
}

/// Per-client holder of the authenticated identity.
pub trait SessionStore: Send + Sync {
    fn get_current(&self) -> Option<Identity>;

    fn set(&self, identity: Identity);

    fn clear(&self);
}
