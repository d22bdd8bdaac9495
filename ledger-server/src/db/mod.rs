//! Database Module
//!
//! Storage bootstrap for the document store. The connection string selects
//! the engine: `rocksdb://<path>` embedded (the default), `ws://host:port`
//! for an external server, `mem://` in tests.

pub mod models;
pub mod repository;

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// Fixed delay between startup connection attempts.
const CONNECT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Connect to the store, retrying on a fixed interval until it is reachable.
///
/// The retry count is unbounded: the server does not start serving without
/// storage, and an unreachable store at boot is an operational condition to
/// wait out, not a fatal error.
pub async fn connect_with_retry(url: &str, namespace: &str, database: &str) -> Surreal<Any> {
    loop {
        match connect(url, namespace, database).await {
            Ok(db) => {
                tracing::info!("Storage connected");
                return db;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Storage connection failed, retrying in {}s",
                    CONNECT_RETRY_INTERVAL.as_secs()
                );
                tokio::time::sleep(CONNECT_RETRY_INTERVAL).await;
            }
        }
    }
}

/// Single connection attempt plus schema bootstrap.
pub async fn connect(
    url: &str,
    namespace: &str,
    database: &str,
) -> Result<Surreal<Any>, surrealdb::Error> {
    let db = surrealdb::engine::any::connect(url).await?;
    db.use_ns(namespace).use_db(database).await?;
    define_schema(&db).await?;
    Ok(db)
}

/// Idempotent schema definitions.
///
/// The three collections are schemaless; the one constraint the store
/// enforces is the uniqueness of `member.member_id`, which the sequential
/// id assignment relies on to resolve concurrent creates.
async fn define_schema(db: &Surreal<Any>) -> Result<(), surrealdb::Error> {
    db.query(
        "DEFINE TABLE IF NOT EXISTS member SCHEMALESS;
         DEFINE INDEX IF NOT EXISTS member_id_unique ON TABLE member FIELDS member_id UNIQUE;
         DEFINE TABLE IF NOT EXISTS expense SCHEMALESS;
         DEFINE TABLE IF NOT EXISTS donation SCHEMALESS;",
    )
    .await?
    .check()?;
    Ok(())
}
