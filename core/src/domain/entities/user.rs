//! User entity owned by the auth subsystem.
//!
//! The core consumes users as lookup targets for ownership and login; the
//! password is only ever stored hashed, and hashing itself happens behind
//! the [`PasswordHasher`](crate::services::auth::PasswordHasher) seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrative access to all resources
    Admin,
    /// A regular account-holding client
    Client,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Client
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Client => write!(f, "client"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "client" => Ok(UserRole::Client),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Option<i64>,
    name: String,
    email: String,
    password_hash: String,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user from already-validated input and a hashed password
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        let email: String = email.into();
        Self {
            id: None,
            name: name.into(),
            email: email.trim().to_lowercase(),
            password_hash: password_hash.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rehydrates a user from storage without validation (trusted data)
    pub fn from_persistence(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            created_at,
            updated_at,
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

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Replaces name and email; the caller validates them first
    pub fn update_profile(&mut self, name: impl Into<String>, email: impl Into<String>) {
        let email: String = email.into();
        self.name = name.into();
        self.email = email.trim().to_lowercase();
        self.updated_at = Utc::now();
    }
}
