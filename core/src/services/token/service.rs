//! Main token service implementation

use bson::oid::ObjectId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::TokenServiceConfig;

/// Issues and validates signed identity tokens.
///
/// There is no revocation: any token with a valid signature and an
/// unexpired `exp` is accepted.
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
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Signs a short-lived access token for `account_id`
    pub fn issue_access_token(&self, account_id: &ObjectId, user_agent: &str) -> DomainResult<String> {
        let claims = Claims::new_access_token(
            account_id.to_hex(),
            user_agent,
            self.config.access_token_expiry,
            self.config.issuer.as_str(),
        );
        self.encode_jwt(&claims)
    }

    /// Signs a long-lived refresh token for `account_id`
    pub fn issue_refresh_token(&self, account_id: &ObjectId) -> DomainResult<String> {
        let claims = Claims::new_refresh_token(
            account_id.to_hex(),
            self.config.refresh_token_expiry,
            self.config.issuer.as_str(),
        );
        self.encode_jwt(&claims)
    }

    /// Issues a fresh access + refresh pair
    pub fn issue_pair(&self, account_id: &ObjectId, user_agent: &str) -> DomainResult<TokenPair> {
        Ok(TokenPair::new(
            self.issue_access_token(account_id, user_agent)?,
            self.issue_refresh_token(account_id)?,
        ))
    }

    /// Verifies signature, issuer and expiry and returns the claims.
    ///
    /// Every failure collapses to `InvalidToken`; the cause is only logged.
    pub fn parse(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Rejected token");
                AuthError::InvalidToken
            })
    }

    /// Whether a stored refresh token should be replaced.
    ///
    /// True when the token no longer parses, is not a refresh token, or
    /// expires within the rotation window.
    pub fn needs_rotation(&self, refresh_token: &str) -> bool {
        match self.parse(refresh_token) {
            Ok(claims) => !claims.refresh || claims.remaining() < self.config.refresh_rotation_window,
            Err(_) => true,
        }
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(DomainError::internal)
    }
}
