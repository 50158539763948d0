//! Student persistence behind a uniform contract.
//!
//! Two interchangeable engines implement [`StudentStore`]: the embedded
//! single-file sqlite engine (default) and a networked MySQL engine
//! (opt-in). Selection is a configuration choice made in [`connect`],
//! never runtime type inspection, and a MySQL engine that cannot
//! initialize degrades to sqlite rather than refusing to start.

mod errors;
mod mysql;
mod record;
mod sqlite;

pub use errors::StoreError;
pub use mysql::MySqlStore;
pub use record::{NewStudent, StudentRecord};
pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::config::{BackendKind, DatabaseConfig};
use crate::observability::{Logger, Severity};

/// Durable student persistence contract.
///
/// `get_by_*` return `None` for absent records; absence is not an error at
/// this layer. No update or delete: records are immutable once created.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Idempotently ensure the backing schema exists.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Insert a new record, returning it with the engine-assigned id and
    /// timestamps. The email is lowercased before insert; a unique-constraint
    /// rejection surfaces as [`StoreError::DuplicateEmail`].
    async fn create(&self, candidate: &NewStudent) -> Result<StudentRecord, StoreError>;

    /// Every record, newest first (`created_at` descending, id as the
    /// tiebreaker so the order is stable within one call).
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<StudentRecord>, StoreError>;

    /// Lookup by email. The input is lowercased to match the normalization
    /// applied at create time.
    async fn get_by_email(&self, email: &str) -> Result<Option<StudentRecord>, StoreError>;
}

/// Connect the configured engine, initializing its schema.
///
/// MySQL is tried first when selected; on failure the embedded engine takes
/// over and the degradation is logged. A sqlite failure propagates (fatal
/// at startup).
pub async fn connect(config: &DatabaseConfig) -> Result<Box<dyn StudentStore>, StoreError> {
    if config.backend == BackendKind::MySql {
        match MySqlStore::connect(&config.mysql).await {
            Ok(store) => {
                Logger::log(
                    Severity::Info,
                    "store_connected",
                    &[("backend", "mysql"), ("host", config.mysql.host.as_str())],
                );
                return Ok(Box::new(store));
            }
            Err(err) => {
                let detail = err.to_string();
                Logger::log_stderr(
                    Severity::Warn,
                    "mysql_unavailable_falling_back_to_sqlite",
                    &[("error", detail.as_str())],
                );
            }
        }
    }

    let store = SqliteStore::connect(&config.sqlite).await?;
    let path = config.sqlite.path.display().to_string();
    Logger::log(
        Severity::Info,
        "store_connected",
        &[("backend", "sqlite"), ("path", path.as_str())],
    );
    Ok(Box::new(store))
}
