//! Main client service implementation

use std::sync::Arc;

use pv_shared::config::ValidationConfig;
use tracing::info;

use crate::domain::entities::client::Client;
use crate::domain::value_objects::ClientResponse;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ClientRepository;
use crate::validation::{parse_amount, AmountRequest, CreateClientRequest, UpdateClientRequest};

/// Service for managing clients and their balances
pub struct ClientService<R: ClientRepository> {
    /// Client repository for database operations
    repository: Arc<R>,
    /// Input validation limits
    limits: ValidationConfig,
}

impl<R: ClientRepository> ClientService<R> {
    /// Create a new client service
    pub fn new(repository: Arc<R>, limits: ValidationConfig) -> Self {
        Self { repository, limits }
    }

    /// Create a new client with a zero balance
    ///
    /// Fails with `Duplicate` when the email is already registered.
    pub async fn create_client(&self, request: CreateClientRequest) -> DomainResult<ClientResponse> {
        // Step 1: validate the request shape
        request.validate(&self.limits)?;

        // Step 2: construct the entity (normalizes the email)
        let client = Client::create(&request.name, &request.email, &self.limits)?;

        // Step 3: uniqueness check against storage
        if self.repository.find_by_email(client.email()).await?.is_some() {
            return Err(DomainError::duplicate("Client", "email", client.email()));
        }

        // Step 4: persist and project
        let client = self.repository.save(client).await?;
        info!(client_id = ?client.id(), "created client");
        Ok(ClientResponse::from(&client))
    }

    /// Fetch a single client by id
    pub async fn get_client(&self, id: i64) -> DomainResult<ClientResponse> {
        let client = self.load(id).await?;
        Ok(ClientResponse::from(&client))
    }

    /// List every client
    pub async fn list_clients(&self) -> DomainResult<Vec<ClientResponse>> {
        let clients = self.repository.find_all().await?;
        Ok(clients.iter().map(ClientResponse::from).collect())
    }

    /// Replace a client's name and email
    ///
    /// When the email changes, uniqueness is re-checked against all other
    /// clients excluding the client itself.
    pub async fn update_client(
        &self,
        id: i64,
        request: UpdateClientRequest,
    ) -> DomainResult<ClientResponse> {
        request.validate(&self.limits)?;

        let mut client = self.load(id).await?;

        let email = request.email.trim().to_lowercase();
        if email != client.email() {
            if let Some(other) = self.repository.find_by_email(&email).await? {
                if other.id() != client.id() {
                    return Err(DomainError::duplicate("Client", "email", email));
                }
            }
        }

        client.update_info(&request.name, &request.email, &self.limits)?;
        let client = self.repository.update(client).await?;
        Ok(ClientResponse::from(&client))
    }

    /// Delete a client after an existence check
    pub async fn delete_client(&self, id: i64) -> DomainResult<()> {
        self.load(id).await?;
        self.repository.delete(id).await?;
        info!(client_id = id, "deleted client");
        Ok(())
    }

    /// Deposit an amount into a client's balance
    pub async fn deposit(&self, id: i64, request: AmountRequest) -> DomainResult<ClientResponse> {
        request.validate(&self.limits)?;
        let amount = parse_amount(request.amount, &self.limits)?;

        let mut client = self.load(id).await?;
        client.deposit(amount, &self.limits)?;

        let client = self.repository.update(client).await?;
        info!(client_id = id, %amount, "deposit into client balance");
        Ok(ClientResponse::from(&client))
    }

    /// Withdraw an amount from a client's balance
    ///
    /// The entity rejects the mutation with `InsufficientFunds` before any
    /// repository write happens.
    pub async fn withdraw(&self, id: i64, request: AmountRequest) -> DomainResult<ClientResponse> {
        request.validate(&self.limits)?;
        let amount = parse_amount(request.amount, &self.limits)?;

        let mut client = self.load(id).await?;
        client.withdraw(amount, &self.limits)?;

        let client = self.repository.update(client).await?;
        info!(client_id = id, %amount, "withdrawal from client balance");
        Ok(ClientResponse::from(&client))
    }

    async fn load(&self, id: i64) -> DomainResult<Client> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", id))
    }
}
