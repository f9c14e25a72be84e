use chrono::Utc;
use complaint_core_db::models::complaint::{EmailString, NameString, NewComplaintModel};
use std::str::FromStr;
use uuid::Uuid;

/// Email unique to one test run so tests sharing a database do not see each other's rows.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}+{}@example.com", Uuid::new_v4().simple())
}

pub fn create_test_new_complaint(owner_email: &str, text: &str) -> NewComplaintModel {
    NewComplaintModel::new(
        EmailString::from_str(owner_email).unwrap(),
        NameString::from_str("Test User").unwrap(),
        text.to_string(),
        Utc::now(),
    )
}
