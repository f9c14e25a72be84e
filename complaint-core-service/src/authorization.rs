//! Who may do what with a complaint.

use complaint_core_api::Identity;
use complaint_core_db::models::complaint::ComplaintModel;

/// Admins see every complaint; everyone else only their own.
pub fn can_view(identity: &Identity, complaint: &ComplaintModel) -> bool {
    identity.is_admin || complaint.is_owned_by(&identity.email)
}

/// Edit and delete: the owner or any admin.
pub fn can_modify(identity: &Identity, complaint: &ComplaintModel) -> bool {
    identity.is_admin || complaint.is_owned_by(&identity.email)
}

/// Admins do not author complaints.
pub fn can_submit(identity: &Identity) -> bool {
    !identity.is_admin
}

/// Only admins resolve or reopen; ownership does not matter.
pub fn can_toggle_status(identity: &Identity) -> bool {
    identity.is_admin
}
