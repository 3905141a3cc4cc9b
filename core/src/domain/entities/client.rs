//! Client entity representing an account holder with a managed balance.

use pv_shared::config::ValidationConfig;
use rust_decimal::Decimal;

use crate::errors::{DomainError, DomainResult};
use crate::validation::{check_profile, validate_amount};

/// A client with identity and an invariant-protected balance.
///
/// The balance can only change through [`deposit`](Client::deposit) and
/// [`withdraw`](Client::withdraw), both of which enforce the balance
/// invariants regardless of the caller. `id` stays `None` until the
/// repository persists the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    id: Option<i64>,
    name: String,
    email: String,
    balance: Decimal,
}

impl Client {
    /// Creates a new client from raw input.
    ///
    /// Name and email are validated against the configured limits; the email
    /// is case-normalized. The balance always starts at zero.
    pub fn create(name: &str, email: &str, limits: &ValidationConfig) -> DomainResult<Self> {
        let errors = check_profile(name, email, limits);
        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }

        Ok(Self {
            id: None,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            balance: Decimal::ZERO,
        })
    }

    /// Rehydrates a client from storage without validation (trusted data).
    pub fn from_persistence(id: i64, name: impl Into<String>, email: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
            balance,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds a validated amount to the balance.
    ///
    /// Fails with a validation error for a non-positive amount, an amount
    /// above the per-transaction ceiling, or a deposit that would push the
    /// balance over the configured cap. The balance is untouched on failure.
    pub fn deposit(&mut self, amount: Decimal, limits: &ValidationConfig) -> DomainResult<()> {
        validate_amount(amount, limits)?;

        let new_balance = self.balance + amount;
        if new_balance > limits.max_balance {
            return Err(DomainError::validation(
                "Deposit would exceed the maximum allowed balance",
            ));
        }

        self.balance = new_balance;
        Ok(())
    }

    /// Subtracts a validated amount from the balance.
    ///
    /// Fails with [`DomainError::InsufficientFunds`] when the amount exceeds
    /// the current balance; the balance is untouched on failure.
    pub fn withdraw(&mut self, amount: Decimal, limits: &ValidationConfig) -> DomainResult<()> {
        validate_amount(amount, limits)?;

        if amount > self.balance {
            return Err(DomainError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }

    /// Same check as [`withdraw`](Client::withdraw) without mutation; never
    /// errors.
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && amount <= self.balance
    }

    /// Replaces name and email atomically: both fields are validated before
    /// either is assigned, so a rejected update changes nothing.
    pub fn update_info(&mut self, name: &str, email: &str, limits: &ValidationConfig) -> DomainResult<()> {
        let errors = check_profile(name, email, limits);
        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }

        self.name = name.trim().to_string();
        self.email = email.trim().to_lowercase();
        Ok(())
    }
}
