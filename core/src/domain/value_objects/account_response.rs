//! Account response value object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::account::{Account, AccountStatus, AccountType};

/// Flat projection of an account returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Option<i64>,
    pub user_id: i64,
    pub account_number: String,
    pub balance: Decimal,
    pub account_type: AccountType,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            user_id: account.user_id(),
            account_number: account.account_number().to_string(),
            balance: account.balance(),
            account_type: account.account_type(),
            status: account.status(),
            created_at: account.created_at(),
        }
    }
}
