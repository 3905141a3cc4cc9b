//! # PayVault Core
//!
//! Core business logic and domain layer for the PayVault backend.
//! This crate contains domain entities, business services, repository
//! interfaces, request validation schemas, and the error taxonomy that form
//! the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::entities::account::{Account, AccountStatus, AccountType};
pub use domain::entities::client::Client;
pub use domain::entities::token::Claims;
pub use domain::entities::user::{User, UserRole};
pub use domain::value_objects::{AccountResponse, AuthResponse, ClientResponse, UserResponse};
pub use errors::{DomainError, DomainResult};
pub use repositories::{AccountRepository, AuthRepository, ClientRepository};
pub use services::{
    AccountService, AccountServiceConfig, AuthService, AuthServiceConfig, BcryptPasswordHasher,
    ClientService, PasswordHasher, TokenService, TokenServiceConfig,
};
