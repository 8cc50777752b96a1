//! MongoDB connection management
//!
//! Wraps a driver `Client` bound to one logical database, plus the
//! startup index bootstrap and a ping-based health check.

use std::fmt;
use std::time::Duration;

use bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use mule_core::repositories::Collection;
use mule_shared::config::DatabaseConfig;

use crate::InfrastructureError;

const APP_NAME: &str = "mule";

/// Connection to the configured MongoDB database
#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
    config: DatabaseConfig,
}

impl MongoConnection {
    /// Parse the connection string and build a client.
    ///
    /// The driver connects lazily, so this fails only on a malformed URL or
    /// options; use `health_check` to confirm the server is reachable.
    pub async fn connect(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.max_pool_size = Some(config.max_connections);
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout));
        options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout));

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);

        tracing::info!(
            database = %config.name,
            max_connections = config.max_connections,
            "MongoDB client created"
        );

        Ok(Self {
            client,
            database,
            config,
        })
    }

    /// Handle to the logical database
    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Round-trip a `ping` command
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let reply = self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(matches!(reply.get_f64("ok"), Ok(ok) if ok >= 1.0)
            || matches!(reply.get_i32("ok"), Ok(1)))
    }

    /// Create the unique indexes every collection declares.
    ///
    /// Failures are logged and skipped; the returned report says which
    /// indexes exist afterwards.
    pub async fn ensure_indexes(&self) -> IndexReport {
        let mut report = IndexReport::default();

        for collection in Collection::ALL {
            for field in collection.unique_fields() {
                let model = IndexModel::builder()
                    .keys(doc! { *field: 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build();

                let result = self
                    .database
                    .collection::<bson::Document>(collection.as_str())
                    .create_index(model, None)
                    .await;

                match result {
                    Ok(_) => report.created.push(format!("{}.{}", collection, field)),
                    Err(e) => {
                        tracing::warn!(
                            collection = %collection,
                            field = %field,
                            error = %e,
                            "Failed to create unique index"
                        );
                        report.failed.push(format!("{}.{}", collection, field));
                    }
                }
            }
        }

        tracing::info!(%report, "Index bootstrap finished");
        report
    }

    /// Shut the client down, waiting for in-flight operations
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!(database = %self.config.name, "MongoDB client closed");
    }
}

/// Outcome of the index bootstrap, as `collection.field` names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub created: Vec<String>,
    pub failed: Vec<String>,
}

impl IndexReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for IndexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} unique indexes",
            self.created.len(),
            self.created.len() + self.failed.len()
        )?;
        if !self.failed.is_empty() {
            write!(f, " (failed: {})", self.failed.join(", "))?;
        }
        Ok(())
    }
}
