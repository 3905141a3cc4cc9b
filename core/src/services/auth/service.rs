//! Main authentication service implementation

use std::sync::Arc;

use pv_shared::config::ValidationConfig;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::{AuthResponse, UserResponse};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AccountRepository, AuthRepository};
use crate::services::token::TokenService;
use crate::validation::{LoginRequest, RegisterRequest, UpdateUserRequest};

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;

/// Authentication service for registration, login and user management
pub struct AuthService<R, A, P>
where
    R: AuthRepository,
    A: AccountRepository,
    P: PasswordHasher,
{
    /// User repository for database operations
    users: Arc<R>,
    /// Account repository, consulted by the delete-user rule
    accounts: Arc<A>,
    /// Password hashing seam
    password_hasher: Arc<P>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
    /// Input validation limits
    limits: ValidationConfig,
}

impl<R, A, P> AuthService<R, A, P>
where
    R: AuthRepository,
    A: AccountRepository,
    P: PasswordHasher,
{
    /// Create a new authentication service
    pub fn new(
        users: Arc<R>,
        accounts: Arc<A>,
        password_hasher: Arc<P>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
        limits: ValidationConfig,
    ) -> Self {
        Self {
            users,
            accounts,
            password_hasher,
            token_service,
            config,
            limits,
        }
    }

    /// Register a new user and log them in immediately
    ///
    /// The uniqueness check runs before any hashing, so a duplicate email
    /// never costs a bcrypt round. Registration answers with a token
    /// (auto-login semantics).
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<AuthResponse> {
        // Step 1: validate the request shape
        request.validate(&self.limits)?;

        if !self.config.allow_registration {
            return Err(DomainError::invalid_operation(
                "register",
                "registration is currently disabled",
            ));
        }

        let email = request.email.trim().to_lowercase();

        // Step 2: uniqueness before hashing
        if self.users.find_user_by_email(&email).await?.is_some() {
            return Err(DomainError::duplicate("User", "email", email));
        }

        let role = match request.role.as_deref() {
            Some(raw) => raw
                .parse::<UserRole>()
                .map_err(|_| DomainError::validation("Role must be one of: admin, client"))?,
            None => UserRole::default(),
        };

        // Step 3: hash and persist
        let password_hash = self.password_hasher.hash(&request.password)?;
        let user = User::new(request.name.trim(), email, password_hash, role);
        let user = self.users.create_user(user).await?;

        info!(user_id = ?user.id(), role = %user.role(), "registered new user");

        // Step 4: auto-login
        self.issue_token(&user)
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password produce the identical generic
    /// failure; callers cannot learn which part was wrong.
    pub async fn login(&self, request: LoginRequest) -> DomainResult<AuthResponse> {
        request.validate(&self.limits)?;

        let email = request.email.trim().to_lowercase();

        let user = match self.users.find_user_by_email(&email).await? {
            Some(user) => user,
            None => return Err(Self::invalid_credentials()),
        };

        if !self
            .password_hasher
            .verify(&request.password, user.password_hash())?
        {
            warn!(user_id = ?user.id(), "login with wrong password");
            return Err(Self::invalid_credentials());
        }

        info!(user_id = ?user.id(), "user logged in");
        self.issue_token(&user)
    }

    /// Resolve the user behind a verified token
    ///
    /// Fails with `NotFound` when the id encoded in the token no longer
    /// resolves to a user.
    pub async fn current_user(&self, user_id: i64) -> DomainResult<UserResponse> {
        self.users
            .find_user_by_id(user_id)
            .await?
            .map(|user| UserResponse::from(&user))
            .ok_or_else(|| DomainError::not_found("User", user_id))
    }

    /// Verify a raw token and resolve its user in one step
    pub async fn current_user_from_token(&self, token: &str) -> DomainResult<UserResponse> {
        let claims = self.token_service.verify_token(token)?;
        self.current_user(claims.user_id()?).await
    }

    /// Replace a user's name and email
    ///
    /// When the email changes, uniqueness is re-checked against all other
    /// users excluding the user itself.
    pub async fn update_user(&self, id: i64, request: UpdateUserRequest) -> DomainResult<UserResponse> {
        request.validate(&self.limits)?;

        let mut user = self
            .users
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))?;

        let email = request.email.trim().to_lowercase();
        if email != user.email() {
            if let Some(other) = self.users.find_user_by_email(&email).await? {
                if other.id() != user.id() {
                    return Err(DomainError::duplicate("User", "email", email));
                }
            }
        }

        user.update_profile(request.name.trim(), email);
        let user = self.users.update_user(user).await?;
        Ok(UserResponse::from(&user))
    }

    /// Delete a user
    ///
    /// Blocked while the user still owns accounts in active status, or any
    /// account holding funds regardless of status.
    pub async fn delete_user(&self, id: i64) -> DomainResult<()> {
        let user = self
            .users
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))?;

        let accounts = self.accounts.find_by_user_id(id).await?;

        if accounts.iter().any(|a| a.status().is_active()) {
            return Err(DomainError::invalid_operation(
                "delete user",
                "the user still has active accounts; close them first",
            ));
        }
        if accounts.iter().any(|a| a.balance() > Decimal::ZERO) {
            return Err(DomainError::invalid_operation(
                "delete user",
                "the user still has accounts holding funds; withdraw them first",
            ));
        }

        self.users.delete_user(id).await?;
        info!(user_id = id, email = %user.email(), "deleted user");
        Ok(())
    }

    /// List every registered user
    pub async fn list_users(&self) -> DomainResult<Vec<UserResponse>> {
        let users = self.users.find_all_users().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    fn issue_token(&self, user: &User) -> DomainResult<AuthResponse> {
        let user_id = user
            .id()
            .ok_or_else(|| DomainError::internal("user is missing a storage id"))?;
        let token = self
            .token_service
            .generate_token(user_id, user.email(), user.role())?;
        Ok(AuthResponse::new(token, user))
    }

    fn invalid_credentials() -> DomainError {
        DomainError::validation("Invalid email or password")
    }
}
