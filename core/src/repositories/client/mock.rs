//! Mock implementation of ClientRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::client::Client;
use crate::errors::DomainError;

use super::trait_::ClientRepository;

/// In-memory client repository for testing, ids assigned from 1
pub struct MockClientRepository {
    clients: Arc<RwLock<HashMap<i64, Client>>>,
    next_id: AtomicI64,
}

impl MockClientRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let clients = self.clients.read().await;
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by_key(|c| c.id());
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError> {
        let clients = self.clients.read().await;
        Ok(clients.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DomainError> {
        let clients = self.clients.read().await;
        Ok(clients.values().find(|c| c.email() == email).cloned())
    }

    async fn save(&self, client: Client) -> Result<Client, DomainError> {
        let mut clients = self.clients.write().await;

        // The storage layer carries a unique index on email
        if clients.values().any(|c| c.email() == client.email()) {
            return Err(DomainError::duplicate("Client", "email", client.email()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Client::from_persistence(id, client.name(), client.email(), client.balance());
        clients.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, client: Client) -> Result<Client, DomainError> {
        let mut clients = self.clients.write().await;

        let id = client
            .id()
            .ok_or_else(|| DomainError::internal("cannot update a client without an id"))?;
        if !clients.contains_key(&id) {
            return Err(DomainError::not_found("Client", id));
        }

        clients.insert(id, client.clone());
        Ok(client)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut clients = self.clients.write().await;
        Ok(clients.remove(&id).is_some())
    }
}
