//! Input validation limits
//!
//! Every bound used by the request schemas lives here so that deployments can
//! tune limits without touching the validation code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configurable limits for request validation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Minimum length for person/client names
    #[serde(default = "default_name_min")]
    pub name_min_length: usize,

    /// Maximum length for person/client names
    #[serde(default = "default_name_max")]
    pub name_max_length: usize,

    /// Maximum length for email addresses
    #[serde(default = "default_email_max")]
    pub email_max_length: usize,

    /// Minimum length for passwords
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,

    /// Maximum length for passwords
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,

    /// Ceiling for a single deposit or withdrawal
    #[serde(default = "default_max_amount")]
    pub max_transaction_amount: Decimal,

    /// Ceiling for any stored balance
    #[serde(default = "default_max_balance")]
    pub max_balance: Decimal,
}

fn default_name_min() -> usize {
    2
}

fn default_name_max() -> usize {
    100
}

fn default_email_max() -> usize {
    254
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    128
}

fn default_max_amount() -> Decimal {
    Decimal::from(1_000_000)
}

fn default_max_balance() -> Decimal {
    Decimal::from(1_000_000_000i64)
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min_length: default_name_min(),
            name_max_length: default_name_max(),
            email_max_length: default_email_max(),
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
            max_transaction_amount: default_max_amount(),
            max_balance: default_max_balance(),
        }
    }
}
