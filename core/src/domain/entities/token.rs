//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Hex id of the account the token was issued for
    pub account_id: String,

    /// `true` for refresh tokens, which are never accepted as bearer credentials
    pub refresh: bool,

    /// User agent of the request that obtained the token (empty for refresh tokens)
    pub user_agent: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(
        account_id: impl Into<String>,
        user_agent: impl Into<String>,
        lifetime: Duration,
        issuer: impl Into<String>,
    ) -> Self {
        Self::build(account_id.into(), false, user_agent.into(), lifetime, issuer.into())
    }

    /// Creates new claims for a refresh token
    pub fn new_refresh_token(
        account_id: impl Into<String>,
        lifetime: Duration,
        issuer: impl Into<String>,
    ) -> Self {
        Self::build(account_id.into(), true, String::new(), lifetime, issuer.into())
    }

    fn build(account_id: String, refresh: bool, user_agent: String, lifetime: Duration, iss: String) -> Self {
        let now = Utc::now();
        Self {
            account_id,
            refresh,
            user_agent,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            iss,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Time left before expiry, zero once expired
    pub fn remaining(&self) -> Duration {
        let left = self.exp - Utc::now().timestamp();
        Duration::seconds(left.max(0))
    }
}

/// Token pair returned by account creation and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
