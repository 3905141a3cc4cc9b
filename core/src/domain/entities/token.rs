//! JWT claims for the authentication token.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, DomainResult};

/// Default JWT issuer
pub const JWT_ISSUER: &str = "payvault";

/// Default JWT audience
pub const JWT_AUDIENCE: &str = "payvault-api";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Role of the authenticated user (`admin` or `client`)
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Creates claims for a freshly issued token
    pub fn new(
        user_id: i64,
        email: impl Into<String>,
        role: UserRole,
        valid_for_seconds: i64,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(valid_for_seconds);

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.into(),
            aud: audience.into(),
        }
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> DomainResult<i64> {
        self.sub
            .parse()
            .map_err(|_| DomainError::unauthorized("Invalid token subject"))
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new(42, "jane@example.com", UserRole::Admin, 3600, JWT_ISSUER, JWT_AUDIENCE);

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new(1, "a@b.com", UserRole::Client, -60, JWT_ISSUER, JWT_AUDIENCE);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_invalid_subject() {
        let mut claims = Claims::new(1, "a@b.com", UserRole::Client, 60, JWT_ISSUER, JWT_AUDIENCE);
        claims.sub = "not-a-number".to_string();
        assert!(claims.user_id().is_err());
    }
}
