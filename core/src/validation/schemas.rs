//! One schema per inbound request shape.
//!
//! Schemas only check constraints; normalization (trimming, email case
//! folding) happens in the entity factories and use cases.

use pv_shared::config::ValidationConfig;
use pv_shared::utils::validation::{validators, ValidationErrors};
use serde::Deserialize;

use crate::errors::{DomainError, DomainResult};

use super::{check_profile, parse_amount, single_error};

/// Request to create a new client
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
}

impl CreateClientRequest {
    pub fn validate(&self, limits: &ValidationConfig) -> DomainResult<()> {
        let errors = check_profile(&self.name, &self.email, limits);
        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }
        Ok(())
    }
}

/// Request to replace a client's name and email
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClientRequest {
    pub name: String,
    pub email: String,
}

impl UpdateClientRequest {
    pub fn validate(&self, limits: &ValidationConfig) -> DomainResult<()> {
        let errors = check_profile(&self.name, &self.email, limits);
        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }
        Ok(())
    }
}

/// Request carrying a bare monetary amount (client deposit/withdraw)
#[derive(Debug, Clone, Deserialize)]
pub struct AmountRequest {
    pub amount: f64,
}

impl AmountRequest {
    pub fn validate(&self, limits: &ValidationConfig) -> DomainResult<()> {
        parse_amount(self.amount, limits).map(|_| ())
    }
}

/// Request to open an account for an existing user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub user_id: i64,
    #[serde(default)]
    pub account_type: Option<String>,
}

impl CreateAccountRequest {
    pub fn validate(&self, _limits: &ValidationConfig) -> DomainResult<()> {
        let mut errors = ValidationErrors::new();
        if self.user_id <= 0 {
            errors.add_error("user_id", "Owner id must be a positive integer", "INVALID_ID");
        }
        if let Some(account_type) = &self.account_type {
            if !matches!(account_type.as_str(), "checking" | "savings") {
                errors.add_error(
                    "account_type",
                    "Account type must be one of: checking, savings",
                    "INVALID_ENUM",
                );
            }
        }
        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }
        Ok(())
    }
}

/// Request to move money into or out of an account on behalf of a user
#[derive(Debug, Clone, Deserialize)]
pub struct AccountTransactionRequest {
    pub account_id: i64,
    pub user_id: i64,
    pub amount: f64,
}

impl AccountTransactionRequest {
    pub fn validate(&self, limits: &ValidationConfig) -> DomainResult<()> {
        if self.account_id <= 0 {
            return Err(single_error(
                "account_id",
                "Account id must be a positive integer",
                "INVALID_ID",
            ));
        }
        if self.user_id <= 0 {
            return Err(single_error(
                "user_id",
                "User id must be a positive integer",
                "INVALID_ID",
            ));
        }
        parse_amount(self.amount, limits).map(|_| ())
    }
}

/// Request to register a new user
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn validate(&self, limits: &ValidationConfig) -> DomainResult<()> {
        let mut errors = check_profile(&self.name, &self.email, limits);

        if !validators::length_between(
            &self.password,
            limits.password_min_length,
            limits.password_max_length,
        ) {
            errors.add_error(
                "password",
                format!(
                    "Password must be between {} and {} characters",
                    limits.password_min_length, limits.password_max_length
                ),
                "INVALID_LENGTH",
            );
        }

        if let Some(role) = &self.role {
            if !validators::is_valid_role(role) {
                errors.add_error("role", "Role must be one of: admin, client", "INVALID_ENUM");
            }
        }

        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }
        Ok(())
    }
}

/// Request to authenticate with email and password
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self, limits: &ValidationConfig) -> DomainResult<()> {
        let mut errors = ValidationErrors::new();
        let email = self.email.trim();

        if email.len() > limits.email_max_length || !validators::is_valid_email(email) {
            errors.add_error("email", "Invalid email format", "INVALID_EMAIL");
        }
        if !validators::not_empty(&self.password) {
            errors.add_error("password", "Password must not be empty", "REQUIRED_FIELD");
        }

        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }
        Ok(())
    }
}

/// Request to replace a user's name and email
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

impl UpdateUserRequest {
    pub fn validate(&self, limits: &ValidationConfig) -> DomainResult<()> {
        let errors = check_profile(&self.name, &self.email, limits);
        if errors.has_errors() {
            return Err(DomainError::from_field_errors(errors));
        }
        Ok(())
    }
}
