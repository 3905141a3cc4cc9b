//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// In-memory account repository for testing, ids assigned from 1
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    next_id: AtomicI64,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the repository with an already-persisted account
    pub async fn insert(&self, account: Account) {
        let mut accounts = self.accounts.write().await;
        if let Some(id) = account.id() {
            self.next_id.fetch_max(id + 1, Ordering::SeqCst);
            accounts.insert(id, account);
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by_key(|a| a.id());
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let mut owned: Vec<Account> = accounts
            .values()
            .filter(|a| a.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|a| a.id());
        Ok(owned)
    }

    async fn find_by_account_number(&self, number: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.account_number() == number).cloned())
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        // The storage layer carries a unique index on account_number
        if accounts
            .values()
            .any(|a| a.account_number() == account.account_number())
        {
            return Err(DomainError::duplicate(
                "Account",
                "account_number",
                account.account_number(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Account::from_persistence(
            id,
            account.user_id(),
            account.account_number(),
            account.balance(),
            account.account_type(),
            account.status(),
            account.created_at(),
            account.updated_at(),
        );
        accounts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let id = account
            .id()
            .ok_or_else(|| DomainError::internal("cannot update an account without an id"))?;
        if !accounts.contains_key(&id) {
            return Err(DomainError::not_found("Account", id));
        }

        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }
}
