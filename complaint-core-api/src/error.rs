use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplaintError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No changes made: {0}")]
    NoChange(String),

    /// Underlying persistence failure. The core never retries; callers may.
    #[error("Store error: {0}")]
    StoreError(String),
}

impl ComplaintError {
    /// Human readable message without the variant prefix, suitable for a response body.
    pub fn message(&self) -> String {
        match self {
            ComplaintError::Unauthenticated => "Not authenticated".to_string(),
            ComplaintError::Forbidden(msg)
            | ComplaintError::NotFound(msg)
            | ComplaintError::InvalidInput(msg)
            | ComplaintError::NoChange(msg) => msg.clone(),
            ComplaintError::StoreError(_) => "Server error".to_string(),
        }
    }

    pub fn store<E: std::fmt::Display + ?Sized>(err: &E) -> Self {
        ComplaintError::StoreError(err.to_string())
    }
}

pub type ComplaintResult<T> = Result<T, ComplaintError>;
