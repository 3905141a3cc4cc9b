//! Configuration for the account service

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// How many generated account numbers to try before giving up on a
    /// creation request
    pub max_number_attempts: u32,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            max_number_attempts: 5,
        }
    }
}
