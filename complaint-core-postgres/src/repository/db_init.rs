//! Schema setup and teardown.
//!
//! The scripts under `migrations/` and `cleanup/` are compiled into the crate,
//! so a deployed binary does not need the source tree. Migrations run in
//! ascending order, cleanup scripts in descending order.

use sqlx::PgPool;

/// A named SQL script.
pub struct SqlScript {
    pub name: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[SqlScript] = &[SqlScript {
    name: "001_complaint.sql",
    sql: include_str!("../../migrations/001_complaint.sql"),
}];

pub const CLEANUP: &[SqlScript] = &[SqlScript {
    name: "001_complaint.sql",
    sql: include_str!("../../cleanup/001_complaint.sql"),
}];

/// Create the complaint schema. Safe to run against an initialised database.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use complaint_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    for script in MIGRATIONS {
        run_script(pool, script).await?;
    }
    Ok(())
}

/// Drop everything [`init_database`] created.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    for script in CLEANUP.iter().rev() {
        run_script(pool, script).await?;
    }
    Ok(())
}

async fn run_script(pool: &PgPool, script: &SqlScript) -> Result<(), sqlx::Error> {
    tracing::debug!(script = script.name, "Executing SQL script");
    sqlx::raw_sql(script.sql).execute(pool).await?;
    Ok(())
}
