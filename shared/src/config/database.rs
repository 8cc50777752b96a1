//! Database configuration module

use serde::{Deserialize, Serialize};

/// Document database configuration for MongoDB connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Logical database name
    pub name: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Create the unique indexes on startup
    #[serde(default = "default_ensure_indexes")]
    pub ensure_indexes: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mongodb://localhost:27017"),
            name: String::from("mule"),
            max_connections: 10,
            connect_timeout: 30,
            ensure_indexes: default_ensure_indexes(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let name = std::env::var("DB_NAME").unwrap_or_else(|_| "mule".to_string());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Self {
            url,
            name,
            max_connections,
            connect_timeout,
            ..Default::default()
        }
    }

    /// Create a new database configuration with URL and database name
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Skip index creation on startup
    pub fn without_indexes(mut self) -> Self {
        self.ensure_indexes = false;
        self
    }

    /// Check if this is a production database
    pub fn is_production(&self) -> bool {
        !self.url.contains("localhost") && !self.url.contains("127.0.0.1")
    }
}

fn default_ensure_indexes() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_builder() {
        let config = DatabaseConfig::new("mongodb://db.internal:27017", "mule_test")
            .with_max_connections(20)
            .without_indexes();

        assert_eq!(config.name, "mule_test");
        assert_eq!(config.max_connections, 20);
        assert!(!config.ensure_indexes);
        assert!(config.is_production());
    }

    #[test]
    fn test_localhost_is_not_production() {
        assert!(!DatabaseConfig::default().is_production());
    }
}
