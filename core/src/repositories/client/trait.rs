//! Client repository trait defining the interface for client persistence.
//!
//! This module defines the repository pattern interface for Client entities.
//! The trait is async-first and uses Result types for proper error handling;
//! implementations handle the actual database operations while keeping the
//! abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;

use crate::domain::entities::client::Client;
use crate::errors::DomainError;

/// Repository trait for Client entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use pv_core::domain::entities::client::Client;
/// use pv_core::errors::DomainError;
/// use pv_core::repositories::ClientRepository;
///
/// struct MySqlClientRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl ClientRepository for MySqlClientRepository {
///     async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
///         Ok(Vec::new())
///     }
///
///     async fn find_by_id(&self, _id: i64) -> Result<Option<Client>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_email(&self, _email: &str) -> Result<Option<Client>, DomainError> {
///         Ok(None)
///     }
///
///     async fn save(&self, client: Client) -> Result<Client, DomainError> {
///         Ok(client)
///     }
///
///     async fn update(&self, client: Client) -> Result<Client, DomainError> {
///         Ok(client)
///     }
///
///     async fn delete(&self, _id: i64) -> Result<bool, DomainError> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// List every stored client
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;

    /// Find a client by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Client))` - Client found
    /// * `Ok(None)` - No client with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError>;

    /// Find a client by its case-normalized email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DomainError>;

    /// Persist a new client
    ///
    /// # Returns
    /// The stored client with its storage-assigned id filled in.
    async fn save(&self, client: Client) -> Result<Client, DomainError>;

    /// Update an existing client
    ///
    /// Fails with `DomainError::NotFound` when the client does not exist.
    async fn update(&self, client: Client) -> Result<Client, DomainError>;

    /// Delete a client by id
    ///
    /// # Returns
    /// * `Ok(true)` - Client was deleted
    /// * `Ok(false)` - Client not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
