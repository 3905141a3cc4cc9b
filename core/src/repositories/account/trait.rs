//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// List every stored account
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError>;

    /// List all accounts owned by the given user
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Account>, DomainError>;

    /// Find an account by its generated account number
    ///
    /// Used for the collision check during account creation.
    async fn find_by_account_number(&self, number: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account, returning it with its storage-assigned id
    async fn save(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Delete an account by id
    ///
    /// # Returns
    /// * `Ok(true)` - Account was deleted
    /// * `Ok(false)` - Account not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
