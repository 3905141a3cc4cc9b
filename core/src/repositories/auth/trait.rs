//! Auth repository trait defining the interface for user persistence.
//!
//! The user table is owned by the auth subsystem; the core reads users for
//! login, ownership checks and account creation, and writes them only
//! through the registration and profile-update use cases.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Find a user by case-normalized email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by its unique identifier
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Persist a new user, returning it with its storage-assigned id
    ///
    /// The password on the entity must already be hashed.
    async fn create_user(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update_user(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user by id
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete_user(&self, id: i64) -> Result<bool, DomainError>;

    /// List every registered user
    async fn find_all_users(&self) -> Result<Vec<User>, DomainError>;
}
