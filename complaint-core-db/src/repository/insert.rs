use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a new entity
///
/// The store assigns the identifier; `N` is the id-less input and `T` the
/// stored entity returned with its generated fields populated.
///
/// # Example
/// ```ignore
/// impl Insert<NewComplaintModel, ComplaintModel> for ComplaintRepositoryImpl {
///     async fn insert(&self, item: NewComplaintModel) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Insert<N: Send + 'static, T: Identifiable>: Send + Sync {
    /// Insert one item
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity including its assigned id
    /// * `Err` - An error if the insert could not be executed
    async fn insert(&self, item: N) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
