use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db;

/// Shared server state: the configuration and the owned storage handle.
///
/// The handle is cloned into a repository per request; nothing reaches the
/// store through globals. Reconnection for remote engines is encapsulated
/// inside the handle itself.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Document store handle
    pub db: Surreal<Any>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Any>) -> Self {
        Self { config, db }
    }

    /// Initialize server state: connect to storage, retrying until it is
    /// reachable, and apply the schema definitions.
    pub async fn initialize(config: &Config) -> Self {
        let db = db::connect_with_retry(
            &config.storage_url,
            &config.storage_namespace,
            &config.storage_database,
        )
        .await;
        Self {
            config: config.clone(),
            db,
        }
    }

    /// Probe storage connectivity for the health endpoint.
    pub async fn storage_connected(&self) -> bool {
        self.db.health().await.is_ok()
    }
}
