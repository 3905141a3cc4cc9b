//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, DomainResult};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWTs (HS256)
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a token for the given user identity
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn generate_token(&self, user_id: i64, email: &str, role: UserRole) -> DomainResult<String> {
        let claims = Claims::new(
            user_id,
            email,
            role,
            self.config.token_expiry_seconds,
            &self.config.issuer,
            &self.config.audience,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Token generation failed: {}", e)))
    }

    /// Verifies a token's signature, expiry, issuer and audience
    ///
    /// Every failure collapses to the same unauthorized error; callers must
    /// not learn why a token was rejected.
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::unauthorized("Invalid or expired token"))
    }

    /// Token lifetime in seconds, as configured
    pub fn token_expiry_seconds(&self) -> i64 {
        self.config.token_expiry_seconds
    }
}
