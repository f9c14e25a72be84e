use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for partially updating an entity
///
/// `P` describes the fields to set. Implementations report how many rows were
/// effectively modified; a row whose patched fields already hold the given
/// values (ignoring the `updated_at` touch field) is not counted.
#[async_trait]
pub trait UpdateFields<P: Send + 'static>: Send + Sync {
    /// Apply `patch` to the entity identified by `id`
    ///
    /// # Returns
    /// * `Ok(1)` - The entity was modified
    /// * `Ok(0)` - No entity matched, or the patch changed nothing
    /// * `Err` - An error if the update could not be executed
    async fn update_fields(
        &self,
        id: Uuid,
        patch: P,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
