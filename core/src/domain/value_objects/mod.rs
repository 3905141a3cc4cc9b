//! Value objects representing the response shapes returned to the transport
//! layer. Responses are flat field projections; the entities themselves are
//! never leaked.

pub mod account_response;
pub mod auth_response;
pub mod client_response;
pub mod user_response;

// Re-export commonly used types
pub use account_response::AccountResponse;
pub use auth_response::{AuthResponse, UserSummary};
pub use client_response::ClientResponse;
pub use user_response::UserResponse;
