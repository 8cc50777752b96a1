//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens (HS256)
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// A stored refresh token is replaced at login once its remaining
    /// lifetime drops below this many seconds
    #[serde(default = "default_rotation_window")]
    pub refresh_rotation_window: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 86_400,     // 24 hours
            refresh_token_expiry: 2_592_000, // 30 days
            refresh_rotation_window: default_rotation_window(),
            issuer: String::from("mule"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in hours
    pub fn with_access_expiry_hours(mut self, hours: i64) -> Self {
        self.access_token_expiry = hours * 3600;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Password hashing and validation policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,

    /// Minimum accepted password length
    pub min_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 12,
            min_length: 6,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Upper bound on concurrently valid access tokens per account.
    /// Stored on each token manager, not enforced.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password: PasswordConfig::default(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry: env_or("JWT_ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry),
            refresh_token_expiry: env_or("JWT_REFRESH_TOKEN_EXPIRY", defaults.refresh_token_expiry),
            refresh_rotation_window: env_or(
                "JWT_REFRESH_ROTATION_WINDOW",
                defaults.refresh_rotation_window,
            ),
            issuer: defaults.issuer,
        };

        let password = PasswordConfig {
            bcrypt_cost: env_or("BCRYPT_COST", PasswordConfig::default().bcrypt_cost),
            ..Default::default()
        };

        Self {
            jwt,
            password,
            max_tokens: default_max_tokens(),
        }
    }

    /// Configuration suited to tests: fixed secret and the cheapest bcrypt cost
    pub fn for_tests() -> Self {
        Self {
            jwt: JwtConfig::new("test-secret"),
            password: PasswordConfig {
                bcrypt_cost: 4,
                ..Default::default()
            },
            max_tokens: default_max_tokens(),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn default_rotation_window() -> i64 {
    86_400
}

fn default_max_tokens() -> i32 {
    5
}
