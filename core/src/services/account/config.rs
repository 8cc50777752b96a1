//! Configuration for the account service

use mule_shared::config::AuthConfig;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Minimum accepted password length
    pub min_password_length: usize,
    /// Stored on every new token manager
    pub max_tokens: i32,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self::from(&AuthConfig::default())
    }
}

impl From<&AuthConfig> for AccountServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.password.bcrypt_cost,
            min_password_length: config.password.min_length,
            max_tokens: config.max_tokens,
        }
    }
}
