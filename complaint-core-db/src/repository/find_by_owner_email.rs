use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Repository trait for loading the entities owned by one user
#[async_trait]
pub trait FindByOwnerEmail<T: Identifiable>: Send + Sync {
    /// Load the entities whose owner email equals `owner_email` exactly, newest first
    async fn find_by_owner_email(
        &self,
        owner_email: &str,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
