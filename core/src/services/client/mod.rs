//! Client service module
//!
//! One method per client use case: create, get, list, update, delete,
//! deposit and withdraw.

mod service;

#[cfg(test)]
mod tests;

pub use service::ClientService;
