use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for deleting an entity by its ID
///
/// Deletes are permanent.
#[async_trait]
pub trait DeleteById: Send + Sync {
    /// Delete the entity identified by `id`
    ///
    /// # Returns
    /// * `Ok(u64)` - The number of rows deleted (0 or 1)
    /// * `Err` - An error if the delete could not be executed
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
