//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Mule backend. It
//! provides the concrete pieces a process needs around the core services.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: the MongoDB `DocumentStore` backend, connection setup and
//!   unique index bootstrap
//! - **Telemetry**: the `tracing` subscriber driven by `LoggingConfig`
//! - **Bootstrap**: `initialize()`, which wires configuration, store and
//!   services together

use std::sync::Arc;

use mule_core::repositories::SharedStore;
use mule_core::services::AppServices;
use mule_shared::config::{AppConfig, Environment};

/// Database module - MongoDB implementations
pub mod database;

/// Tracing subscriber setup
pub mod telemetry;

pub use database::{IndexReport, MongoConnection, MongoDocumentStore};

/// Everything a running process holds on to
pub struct Infrastructure {
    pub config: AppConfig,
    pub connection: MongoConnection,
    pub store: SharedStore,
    pub services: AppServices,
}

impl Infrastructure {
    /// Close the database client
    pub async fn shutdown(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Shutting down infrastructure services");
        self.store
            .close()
            .await
            .map_err(|e| InfrastructureError::General(e.to_string()))
    }
}

/// Initialize infrastructure from the process environment
///
/// This function:
/// - Loads `.env` if present and reads `AppConfig` from the environment
/// - Installs the tracing subscriber
/// - Connects to MongoDB and bootstraps the unique indexes
/// - Builds the application services over the store
pub async fn initialize() -> Result<Infrastructure, InfrastructureError> {
    let config = load_config();

    // A subscriber installed by the embedding process takes precedence
    let tracing_result = telemetry::init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Initializing infrastructure services...");
    if let Err(e) = tracing_result {
        tracing::warn!(error = %e, "Keeping existing tracing subscriber");
    }

    initialize_with(config).await
}

/// Initialize infrastructure from an explicit configuration
pub async fn initialize_with(config: AppConfig) -> Result<Infrastructure, InfrastructureError> {
    if config.environment.is_production() && config.auth.jwt.is_using_default_secret() {
        return Err(InfrastructureError::Config(
            "JWT_SECRET must be set in production".to_string(),
        ));
    }

    let connection = MongoConnection::connect(config.database.clone()).await?;
    if !connection.health_check().await? {
        return Err(InfrastructureError::General(
            "MongoDB did not acknowledge ping".to_string(),
        ));
    }

    if config.database.ensure_indexes {
        let report = connection.ensure_indexes().await;
        if !report.is_complete() {
            tracing::warn!(%report, "Continuing without every unique index");
        }
    }

    let store: SharedStore = Arc::new(MongoDocumentStore::new(connection.clone()));
    let services = AppServices::new(store.clone(), &config);

    tracing::info!(database = %config.database.name, "Infrastructure services initialized successfully");

    Ok(Infrastructure {
        config,
        connection,
        store,
        services,
    })
}

/// Load configuration from environment
///
/// `.env` is read first so it can set `ENVIRONMENT`; the per-environment
/// file then fills in anything still unset.
fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    AppConfig::from_env()
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
