//! Database client for rzpay
//!
//! Wraps a pooled MongoDB client. The driver connects lazily, so creating a
//! client only parses the URI; the first operation (or [`DbClient::ping`])
//! touches the network.

use crate::error::DbError;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use rzpay_config::DatabaseConfig;
use std::time::Duration;
use tracing::{debug, info, warn};

const APP_NAME: &str = "rzpay";

/// Database client for rzpay
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DbClient {
    client: Client,
    database: String,
}

impl DbClient {
    /// Create a new database client from a database configuration
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    ///
    /// * The connection string is empty
    /// * The connection string cannot be parsed
    pub async fn from_config(db_config: &DatabaseConfig) -> Result<Self, DbError> {
        if db_config.uri.trim().is_empty() {
            return Err(DbError::ConfigError("MongoDB URI is empty".to_string()));
        }
        if db_config.name.trim().is_empty() {
            return Err(DbError::ConfigError(
                "MongoDB database name is empty".to_string(),
            ));
        }

        let mut options = ClientOptions::parse(&db_config.uri).await?;
        let connect_timeout = Duration::from_secs(db_config.connect_timeout_secs);
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        info!(
            "MongoDB client created for database '{}'",
            db_config.name
        );

        Ok(Self {
            client,
            database: db_config.name.clone(),
        })
    }

    /// Get a typed handle to a collection in the configured database
    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client.database(&self.database).collection::<T>(name)
    }

    /// Name of the configured database
    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Round-trip a `ping` command to check that the server is reachable
    pub async fn ping(&self) -> Result<(), DbError> {
        debug!("Pinging MongoDB");
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Check if the database is healthy
    pub async fn is_healthy(&self) -> bool {
        match self.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("MongoDB health check failed: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Display for DbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbClient({})", self.database)
    }
}
