pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::{ConfigError, PostgresConfig};
pub use postgres_repositories::PostgresRepositories;
pub use repository::complaint_repository::ComplaintRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
