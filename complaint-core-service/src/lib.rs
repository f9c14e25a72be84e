pub mod authorization;
pub mod complaint_service;
pub mod handlers;
pub mod memory;

pub use complaint_service::ComplaintServiceImpl;
pub use handlers::{ComplaintHandlers, HandlerResponse};
pub use memory::{ClientSession, InMemoryComplaintRepository, InMemorySessionRegistry, StaticIdentityProvider};

#[cfg(test)]
pub mod test_utils;
