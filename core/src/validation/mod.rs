//! Request validation schemas and shared constraint rules.
//!
//! Each inbound request shape has a schema struct with a
//! `validate(&self, limits)` method; every limit comes from
//! [`ValidationConfig`](pv_shared::config::ValidationConfig), never from the
//! call site. The amount rules live here too so that entities and schemas
//! apply the identical checks.

mod schemas;

pub use schemas::{
    AccountTransactionRequest, AmountRequest, CreateAccountRequest, CreateClientRequest,
    LoginRequest, RegisterRequest, UpdateClientRequest, UpdateUserRequest,
};

use pv_shared::config::ValidationConfig;
use pv_shared::utils::validation::{validators, ValidationErrors};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::errors::{DomainError, DomainResult};

/// Build a validation error around a single offending field
pub(crate) fn single_error(field: &str, message: &str, code: &str) -> DomainError {
    let mut errors = ValidationErrors::new();
    errors.add_error(field, message, code);
    DomainError::from_field_errors(errors)
}

/// Constraint checks shared by every schema carrying a name/email pair
pub(crate) fn check_profile(name: &str, email: &str, limits: &ValidationConfig) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let name = name.trim();
    let email = email.trim();

    if !validators::not_empty(name) {
        errors.add_error("name", "Name must not be empty", "REQUIRED_FIELD");
    } else if !validators::length_between(name, limits.name_min_length, limits.name_max_length) {
        errors.add_error(
            "name",
            format!(
                "Name must be between {} and {} characters",
                limits.name_min_length, limits.name_max_length
            ),
            "INVALID_LENGTH",
        );
    }

    if !validators::not_empty(email) {
        errors.add_error("email", "Email must not be empty", "REQUIRED_FIELD");
    } else if email.len() > limits.email_max_length || !validators::is_valid_email(email) {
        errors.add_error("email", "Invalid email format", "INVALID_EMAIL");
    }

    errors
}

/// The amount rule applied to every monetary mutation: strictly positive and
/// at most the configured per-transaction ceiling
pub(crate) fn validate_amount(amount: Decimal, limits: &ValidationConfig) -> DomainResult<()> {
    if amount <= Decimal::ZERO {
        return Err(single_error(
            "amount",
            "Amount must be greater than zero",
            "INVALID_AMOUNT",
        ));
    }
    if amount > limits.max_transaction_amount {
        return Err(single_error(
            "amount",
            "Amount exceeds the maximum allowed per transaction",
            "OUT_OF_RANGE",
        ));
    }
    Ok(())
}

/// Gate a wire-level amount into the domain: rejects non-finite and
/// non-positive values, then converts to `Decimal` exactly once
pub fn parse_amount(amount: f64, limits: &ValidationConfig) -> DomainResult<Decimal> {
    if !validators::is_valid_amount(amount) {
        return Err(single_error(
            "amount",
            "Amount must be a positive, finite number",
            "INVALID_AMOUNT",
        ));
    }
    let amount = Decimal::from_f64(amount).ok_or_else(|| {
        single_error("amount", "Amount is not representable", "INVALID_AMOUNT")
    })?;
    validate_amount(amount, limits)?;
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_accepts_positive_values() {
        let limits = ValidationConfig::default();
        assert_eq!(parse_amount(500.0, &limits).unwrap(), dec!(500));
        assert_eq!(parse_amount(0.01, &limits).unwrap(), dec!(0.01));
    }

    #[test]
    fn test_parse_amount_rejects_zero_and_negative() {
        let limits = ValidationConfig::default();
        assert!(parse_amount(0.0, &limits).is_err());
        assert!(parse_amount(-1.0, &limits).is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        let limits = ValidationConfig::default();
        assert!(parse_amount(f64::NAN, &limits).is_err());
        assert!(parse_amount(f64::INFINITY, &limits).is_err());
        assert!(parse_amount(f64::NEG_INFINITY, &limits).is_err());
    }

    #[test]
    fn test_parse_amount_rejects_above_ceiling() {
        let limits = ValidationConfig::default();
        assert!(parse_amount(1_000_001.0, &limits).is_err());
    }

    #[test]
    fn test_validate_amount_respects_configured_ceiling() {
        let limits = ValidationConfig {
            max_transaction_amount: dec!(100),
            ..Default::default()
        };
        assert!(validate_amount(dec!(100), &limits).is_ok());
        assert!(validate_amount(dec!(100.01), &limits).is_err());
    }

    #[test]
    fn test_check_profile_flags_both_fields() {
        let limits = ValidationConfig::default();
        let errors = check_profile("", "not-an-email", &limits);
        assert_eq!(errors.errors().len(), 2);
    }
}
