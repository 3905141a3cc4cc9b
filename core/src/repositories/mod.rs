//! Persistence-agnostic repository contracts consumed by the use cases.
//!
//! Implementations live in the storage adapter; the core only depends on
//! these traits. In-memory mocks back the service tests.

pub mod account;
pub mod auth;
pub mod client;

pub use account::AccountRepository;
pub use auth::AuthRepository;
pub use client::ClientRepository;
