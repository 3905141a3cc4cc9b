//! Mock implementation of AuthRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::AuthRepository;

/// In-memory user repository for testing, ids assigned from 1
pub struct MockAuthRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockAuthRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockAuthRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create_user(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // The storage layer carries a unique index on email
        if users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::duplicate("User", "email", user.email()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = User::from_persistence(
            id,
            user.name(),
            user.email(),
            user.password_hash(),
            user.role(),
            user.created_at(),
            user.updated_at(),
        );
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_user(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let id = user
            .id()
            .ok_or_else(|| DomainError::internal("cannot update a user without an id"))?;
        if !users.contains_key(&id) {
            return Err(DomainError::not_found("User", id));
        }

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn find_all_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id());
        Ok(all)
    }
}
