pub mod repo_impl;
pub mod delete_by_id;
pub mod find_all;
pub mod find_by_id;
pub mod find_by_owner_email;
pub mod insert;
pub mod update_fields;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ComplaintRepositoryImpl;
