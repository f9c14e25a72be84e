use complaint_core_db::models::complaint::{ComplaintModel, EMAIL_MAX_LEN, NAME_MAX_LEN};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

use crate::utils::{get_bounded_string, get_optional_bounded_string, TryFromRow};

pub(super) const COMPLAINT_COLUMNS: &str =
    "id, owner_email, owner_name, text, resolved, created_at, updated_at, status_updated_at, resolved_by";

pub struct ComplaintRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl ComplaintRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub(super) fn rows_to_models(rows: Vec<PgRow>) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        rows.iter().map(ComplaintModel::try_from_row).collect()
    }
}

impl TryFromRow<PgRow> for ComplaintModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ComplaintModel {
            id: row.try_get("id")?,
            owner_email: get_bounded_string(row, "owner_email", EMAIL_MAX_LEN)?,
            owner_name: get_bounded_string(row, "owner_name", NAME_MAX_LEN)?,
            text: row.try_get("text")?,
            resolved: row.try_get("resolved")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            status_updated_at: row.try_get("status_updated_at")?,
            resolved_by: get_optional_bounded_string(row, "resolved_by", EMAIL_MAX_LEN)?,
        })
    }
}
