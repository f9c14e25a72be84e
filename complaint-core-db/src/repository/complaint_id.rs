use complaint_core_api::{ComplaintError, ComplaintResult};
use uuid::Uuid;

/// Parse a raw complaint identifier.
///
/// A malformed id is an input error, never a missing record.
pub fn parse_complaint_id(raw: &str) -> ComplaintResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ComplaintError::InvalidInput(format!("Invalid complaint id: {raw}")))
}
