//! Main account service implementation

use std::sync::Arc;

use pv_shared::config::ValidationConfig;
use tracing::{info, warn};

use crate::domain::entities::account::{Account, AccountType};
use crate::domain::value_objects::AccountResponse;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AccountRepository, AuthRepository};
use crate::validation::{parse_amount, AccountTransactionRequest, CreateAccountRequest};

use super::config::AccountServiceConfig;
use super::number::AccountNumberGenerator;

/// Service for managing accounts and their balances
pub struct AccountService<A, U>
where
    A: AccountRepository,
    U: AuthRepository,
{
    /// Account repository for database operations
    accounts: Arc<A>,
    /// User repository, consulted to verify account owners exist
    users: Arc<U>,
    /// Account number generator
    generator: AccountNumberGenerator,
    /// Service configuration
    config: AccountServiceConfig,
    /// Input validation limits
    limits: ValidationConfig,
}

impl<A, U> AccountService<A, U>
where
    A: AccountRepository,
    U: AuthRepository,
{
    /// Create a new account service
    pub fn new(
        accounts: Arc<A>,
        users: Arc<U>,
        config: AccountServiceConfig,
        limits: ValidationConfig,
    ) -> Self {
        Self {
            accounts,
            users,
            generator: AccountNumberGenerator::new(),
            config,
            limits,
        }
    }

    /// Open a new account for an existing user
    ///
    /// The account number is generated and checked for collisions against
    /// storage; after the configured number of failed attempts the request
    /// fails outright and is not retried further.
    pub async fn create_account(&self, request: CreateAccountRequest) -> DomainResult<AccountResponse> {
        // Step 1: validate the request shape
        request.validate(&self.limits)?;

        // Step 2: the owner must exist
        let owner = self
            .users
            .find_user_by_id(request.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", request.user_id))?;

        let account_type = match request.account_type.as_deref() {
            Some(raw) => raw
                .parse::<AccountType>()
                .map_err(|_| DomainError::validation("Account type must be one of: checking, savings"))?,
            None => AccountType::default(),
        };

        // Step 3: generate a unique number, then construct and persist
        let number = self.unique_account_number(request.user_id).await?;
        let account = Account::create(request.user_id, &number, account_type)?;
        let account = self.accounts.save(account).await?;

        info!(
            account_id = ?account.id(),
            owner = %owner.email(),
            "opened account"
        );
        Ok(AccountResponse::from(&account))
    }

    /// Fetch a single account by id
    pub async fn get_account(&self, id: i64) -> DomainResult<AccountResponse> {
        let account = self.load(id).await?;
        Ok(AccountResponse::from(&account))
    }

    /// List every account
    pub async fn list_accounts(&self) -> DomainResult<Vec<AccountResponse>> {
        let accounts = self.accounts.find_all().await?;
        Ok(accounts.iter().map(AccountResponse::from).collect())
    }

    /// List the accounts owned by a user
    pub async fn list_accounts_for_user(&self, user_id: i64) -> DomainResult<Vec<AccountResponse>> {
        let accounts = self.accounts.find_by_user_id(user_id).await?;
        Ok(accounts.iter().map(AccountResponse::from).collect())
    }

    /// Delete an account
    ///
    /// Allowed only while the balance is exactly zero.
    pub async fn delete_account(&self, id: i64) -> DomainResult<()> {
        let account = self.load(id).await?;

        if account.has_funds() {
            return Err(DomainError::invalid_operation(
                "delete account",
                "the account still holds funds; all funds must be withdrawn first",
            ));
        }

        self.accounts.delete(id).await?;
        info!(account_id = id, "deleted account");
        Ok(())
    }

    /// Deposit into an account on behalf of its owner
    ///
    /// The ownership check runs before any balance mutation.
    pub async fn deposit(&self, request: AccountTransactionRequest) -> DomainResult<AccountResponse> {
        request.validate(&self.limits)?;
        let amount = parse_amount(request.amount, &self.limits)?;

        let mut account = self.load(request.account_id).await?;
        self.check_ownership(&account, request.user_id)?;

        account.deposit(amount, &self.limits)?;
        let account = self.accounts.update(account).await?;

        info!(account_id = request.account_id, %amount, "deposit into account");
        Ok(AccountResponse::from(&account))
    }

    /// Withdraw from an account on behalf of its owner
    pub async fn withdraw(&self, request: AccountTransactionRequest) -> DomainResult<AccountResponse> {
        request.validate(&self.limits)?;
        let amount = parse_amount(request.amount, &self.limits)?;

        let mut account = self.load(request.account_id).await?;
        self.check_ownership(&account, request.user_id)?;

        account.withdraw(amount, &self.limits)?;
        let account = self.accounts.update(account).await?;

        info!(account_id = request.account_id, %amount, "withdrawal from account");
        Ok(AccountResponse::from(&account))
    }

    async fn load(&self, id: i64) -> DomainResult<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account", id))
    }

    fn check_ownership(&self, account: &Account, user_id: i64) -> DomainResult<()> {
        if !account.is_owned_by(user_id) {
            warn!(
                account_id = ?account.id(),
                user_id,
                "rejected operation on foreign account"
            );
            return Err(DomainError::unauthorized(
                "You are not allowed to operate on this account",
            ));
        }
        Ok(())
    }

    async fn unique_account_number(&self, user_id: i64) -> DomainResult<String> {
        for _ in 0..self.config.max_number_attempts {
            let candidate = self.generator.generate(user_id);
            if self
                .accounts
                .find_by_account_number(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        warn!(user_id, attempts = self.config.max_number_attempts, "account number generation exhausted");
        Err(DomainError::internal(
            "unable to generate a unique account number",
        ))
    }
}
