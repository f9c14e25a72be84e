pub mod complaint_id;
pub mod complaint_repository;
pub mod delete_by_id;
pub mod find_all;
pub mod find_by_id;
pub mod find_by_owner_email;
pub mod insert;
pub mod update_fields;

// Re-exports
pub use complaint_id::*;
pub use complaint_repository::*;
pub use delete_by_id::*;
pub use find_all::*;
pub use find_by_id::*;
pub use find_by_owner_email::*;
pub use insert::*;
pub use update_fields::*;
