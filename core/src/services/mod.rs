//! Business services containing domain logic and use cases.

pub mod account;
pub mod auth;
pub mod client;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, AccountServiceConfig};
pub use auth::{AuthService, AuthServiceConfig, BcryptPasswordHasher, PasswordHasher};
pub use client::ClientService;
pub use token::{TokenService, TokenServiceConfig};
