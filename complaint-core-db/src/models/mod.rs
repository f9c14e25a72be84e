pub mod complaint;
pub mod identifiable;

// Re-exports
pub use complaint::*;
pub use identifiable::*;
