//! In-process collaborators: a complaint store, a session registry and an
//! identity provider with a fixed account table.

pub mod complaint_repository;
pub mod identity_provider;
pub mod session;

pub use complaint_repository::InMemoryComplaintRepository;
pub use identity_provider::StaticIdentityProvider;
pub use session::{ClientSession, InMemorySessionRegistry};
