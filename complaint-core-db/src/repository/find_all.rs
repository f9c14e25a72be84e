use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading every entity of a kind
///
/// Items are returned newest first (by creation time, descending).
///
/// # Example
/// ```ignore
/// impl FindAll<ComplaintModel> for ComplaintRepositoryImpl {
///     async fn find_all(&self) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindAll<T: Identifiable>: Send + Sync {
    /// Load all entities, newest first
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All stored entities, possibly empty
    /// * `Err` - An error if the query could not be executed
    async fn find_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
