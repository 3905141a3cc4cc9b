//! Account entity owned by a user, identified by a generated account number.

use chrono::{DateTime, Utc};
use pv_shared::config::ValidationConfig;
use pv_shared::utils::validation::{validators, ValidationErrors};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::validation::validate_amount;

/// Account lifecycle status.
///
/// Used only as a filter predicate (the delete-user rule); no transition
/// logic is defined on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Frozen,
}

impl AccountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Inactive => write!(f, "inactive"),
            AccountStatus::Frozen => write!(f, "frozen"),
        }
    }
}

/// Represents the product type of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Checking
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checking" => Ok(AccountType::Checking),
            "savings" => Ok(AccountType::Savings),
            _ => Err(format!("Unknown account type: {}", s)),
        }
    }
}

/// An account holding funds on behalf of exactly one user.
///
/// The owner is a weak reference (`user_id`) resolved through the auth
/// repository; the entity never embeds the user. Balance invariants are
/// identical to [`Client`](crate::domain::entities::client::Client).
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: Option<i64>,
    user_id: i64,
    account_number: String,
    balance: Decimal,
    account_type: AccountType,
    status: AccountStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account for an existing user.
    ///
    /// The account number must already match the generated format; the
    /// caller is responsible for the uniqueness check against storage.
    pub fn create(user_id: i64, account_number: &str, account_type: AccountType) -> DomainResult<Self> {
        let mut errors = ValidationErrors::new();
        if user_id <= 0 {
            errors.add_error("user_id", "Owner id must be a positive integer", "INVALID_ID");
        }
        if !validators::is_valid_account_number(account_number) {
            errors.add_error(
                "account_number",
                "Account number must be 10 digits without a leading zero",
                "PATTERN_MISMATCH",
            );
        }
        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }

        let now = Utc::now();
        Ok(Self {
            id: None,
            user_id,
            account_number: account_number.to_string(),
            balance: Decimal::ZERO,
            account_type,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrates an account from storage without validation (trusted data).
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: i64,
        user_id: i64,
        account_number: impl Into<String>,
        balance: Decimal,
        account_type: AccountType,
        status: AccountStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            account_number: account_number.into(),
            balance,
            account_type,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Checks whether the given user owns this account
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// True while any funds remain on the account
    pub fn has_funds(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    /// Adds a validated amount to the balance
    pub fn deposit(&mut self, amount: Decimal, limits: &ValidationConfig) -> DomainResult<()> {
        validate_amount(amount, limits)?;

        let new_balance = self.balance + amount;
        if new_balance > limits.max_balance {
            return Err(DomainError::validation(
                "Deposit would exceed the maximum allowed balance",
            ));
        }

        self.balance = new_balance;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Subtracts a validated amount, failing with
    /// [`DomainError::InsufficientFunds`] when the balance is too low
    pub fn withdraw(&mut self, amount: Decimal, limits: &ValidationConfig) -> DomainResult<()> {
        validate_amount(amount, limits)?;

        if amount > self.balance {
            return Err(DomainError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Same check as [`withdraw`](Account::withdraw) without mutation; never
    /// errors.
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && amount <= self.balance
    }
}
