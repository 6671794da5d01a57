//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{AccessToken, Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying session credentials.
///
/// A pure function of the configured secret: no repository, no storage.
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

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed credential for `email` with the configured expiry
    /// window.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - The signed token and its lifetime in seconds
    /// * `Err(DomainError)` - Signing failed
    pub fn issue_token(&self, email: &str) -> Result<AccessToken, DomainError> {
        let claims = Claims::new(email, self.config.access_token_expiry_hours);
        let header = Header::new(self.config.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(AccessToken {
            token,
            expires_in: Duration::hours(self.config.access_token_expiry_hours).num_seconds(),
        })
    }

    /// Verifies a credential and returns its claims.
    ///
    /// Every failure cause (bad signature, malformed payload, wrong
    /// issuer/audience, expiry) collapses to `TokenError::InvalidToken`,
    /// so the transport layer cannot tell callers why verification failed.
    pub fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(kind = ?e.kind(), "token verification failed");
                DomainError::Token(TokenError::InvalidToken)
            })?;

        Ok(token_data.claims)
    }

    /// The configured expiry window, exposed for cookie max-age
    pub fn expiry_hours(&self) -> i64 {
        self.config.access_token_expiry_hours
    }
}
