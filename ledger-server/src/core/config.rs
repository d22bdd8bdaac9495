/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | STORAGE_URL | rocksdb:///var/lib/ledger/data | storage connection string |
/// | STORAGE_NAMESPACE | ledger | storage namespace |
/// | STORAGE_DATABASE | records | storage database name |
/// | HTTP_PORT | 3000 | HTTP listening port |
/// | STATIC_DIR | public | static application shell directory |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// STORAGE_URL=ws://localhost:8000 HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage connection string. The embedded default points at a local
    /// on-disk engine and carries no credentials; a remote endpoint is
    /// expected to arrive via `STORAGE_URL`.
    pub storage_url: String,
    /// Storage namespace
    pub storage_namespace: String,
    /// Storage database name
    pub storage_database: String,
    /// HTTP API listening port
    pub http_port: u16,
    /// Directory the static application shell is served from
    pub static_dir: String,
    /// Running environment: development | staging | production
    pub environment: String,
}

/// Embedded default connection string.
pub const DEFAULT_STORAGE_URL: &str = "rocksdb:///var/lib/ledger/data";

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults above.
    pub fn from_env() -> Self {
        Self {
            storage_url: std::env::var("STORAGE_URL")
                .unwrap_or_else(|_| DEFAULT_STORAGE_URL.into()),
            storage_namespace: std::env::var("STORAGE_NAMESPACE")
                .unwrap_or_else(|_| "ledger".into()),
            storage_database: std::env::var("STORAGE_DATABASE")
                .unwrap_or_else(|_| "records".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the storage endpoint and port; used by tests.
    pub fn with_overrides(storage_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.storage_url = storage_url.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
