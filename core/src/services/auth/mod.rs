//! Authentication service module
//!
//! This module provides the authentication use cases:
//! - User registration with immediate token issuance
//! - Login with a single, non-leaking failure message
//! - Current-user resolution from a verified token
//! - User profile update, listing and guarded deletion

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use service::AuthService;
