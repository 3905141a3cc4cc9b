//! Account service module
//!
//! This module provides the account use cases:
//! - Account creation with owner verification and a generated, collision-checked
//!   account number
//! - Lookup and listing (all, by owner)
//! - Guarded deletion (zero balance only)
//! - Owner-checked deposit and withdrawal

mod config;
mod number;
mod service;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use number::AccountNumberGenerator;
pub use service::AccountService;
