//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{User, UserRole};

/// Minimal user projection embedded in the authentication response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Authentication response containing the issued token and user metadata
///
/// Returned by both registration (auto-login) and login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT token for API authentication
    pub token: String,

    /// The authenticated user
    pub user: UserSummary,
}

impl AuthResponse {
    /// Creates an authentication response from an issued token and the user
    /// it belongs to
    pub fn new(token: impl Into<String>, user: &User) -> Self {
        Self {
            token: token.into(),
            user: UserSummary {
                id: user.id(),
                name: user.name().to_string(),
                email: user.email().to_string(),
                role: user.role(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_summary_projection() {
        let now = Utc::now();
        let user = User::from_persistence(7, "Jane Doe", "jane@example.com", "hash", UserRole::Admin, now, now);
        let response = AuthResponse::new("jwt-token", &user);

        assert_eq!(response.token, "jwt-token");
        assert_eq!(response.user.id, Some(7));
        assert_eq!(response.user.role, UserRole::Admin);
    }

    #[test]
    fn test_password_hash_never_leaks() {
        let user = User::new("Jane Doe", "jane@example.com", "$2b$secret", UserRole::Client);
        let json = serde_json::to_string(&AuthResponse::new("t", &user)).unwrap();
        assert!(!json.contains("secret"));
    }
}
