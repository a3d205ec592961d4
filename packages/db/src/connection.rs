//! Database connection management with lazy initialization.

use std::sync::LazyLock;
use surrealdb::engine::any::{Any, connect};
use surrealdb::Surreal;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Global database instance using lazy initialization.
static DB: LazyLock<OnceCell<Surreal<Any>>> = LazyLock::new(OnceCell::new);

/// Database connection wrapper.
pub type Database = Surreal<Any>;

/// Database configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// `mem://` or `rocksdb://<path>`
    pub endpoint: String,
    pub namespace: String,
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            endpoint: "mem://".to_string(),
            namespace: "jobboard".to_string(),
            database: "main".to_string(),
        }
    }
}

impl DbConfig {
    /// In-memory storage; contents are lost on restart.
    pub fn memory() -> Self {
        Self::default()
    }

    /// Persistent RocksDB storage at `path` (requires the `rocksdb` feature).
    #[cfg(feature = "rocksdb")]
    pub fn rocksdb(path: impl Into<String>) -> Self {
        Self {
            endpoint: format!("rocksdb://{}", path.into()),
            ..Default::default()
        }
    }

    /// Pick storage from `JOBBOARD_DB_PATH`.
    pub fn from_env() -> Self {
        Self::from_path(std::env::var("JOBBOARD_DB_PATH").ok().as_deref())
    }

    /// RocksDB at `path` when one is given and the `rocksdb` feature is on,
    /// in-memory otherwise.
    pub fn from_path(path: Option<&str>) -> Self {
        let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
            return Self::memory();
        };

        #[cfg(feature = "rocksdb")]
        {
            Self::rocksdb(path)
        }

        #[cfg(not(feature = "rocksdb"))]
        {
            tracing::warn!(
                "JOBBOARD_DB_PATH={} ignored: built without the `rocksdb` feature, using in-memory storage",
                path
            );
            Self::memory()
        }
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database not initialized - call init_db first")]
    NotInitialized,
    #[error("Connection error: {0}")]
    Connection(#[from] surrealdb::Error),
    #[error("Query error: {0}")]
    Query(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Initialize the database connection.
///
/// This should be called once at application startup before any database operations.
pub async fn init_db(config: DbConfig) -> Result<&'static Database, DbError> {
    DB.get_or_try_init(|| async {
        tracing::info!("Connecting to database: {}", config.endpoint);

        let db = connect(&config.endpoint).await?;
        db.use_ns(&config.namespace).use_db(&config.database).await?;

        tracing::info!(
            "Connected to database: {}/{}",
            config.namespace,
            config.database
        );

        Ok(db)
    })
    .await
}

/// Get the database connection.
///
/// Fails with [`DbError::NotInitialized`] if [`init_db`] has not run yet.
pub fn get_db() -> Result<&'static Database, DbError> {
    DB.get().ok_or(DbError::NotInitialized)
}
