//! Client response value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::client::Client;

/// Flat projection of a client returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub balance: Decimal,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id(),
            name: client.name().to_string(),
            email: client.email().to_string(),
            balance: client.balance(),
        }
    }
}
