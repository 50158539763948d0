//! Embedded single-file engine.
//!
//! Zero external dependency: the database lives in one file created on
//! first use. The pool is opened once at connect time and shared by every
//! caller; sqlx serializes access, so no cursor state leaks across calls.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::SqliteConfig;

use super::errors::StoreError;
use super::record::{normalize_email, NewStudent, StudentRecord};
use super::StudentStore;

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    course TEXT NOT NULL,
    date_of_birth DATE NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// Student store backed by a single sqlite file.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database file and ensure the schema.
    pub async fn connect(config: &SqliteConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(StoreError::Unavailable)?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }
}

#[async_trait]
impl StudentStore for SqliteStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Unavailable)?;
        Ok(())
    }

    async fn create(&self, candidate: &NewStudent) -> Result<StudentRecord, StoreError> {
        let result = sqlx::query(
            "INSERT INTO students (name, email, course, date_of_birth) VALUES (?, ?, ?, ?)",
        )
        .bind(candidate.name.trim())
        .bind(candidate.normalized_email())
        .bind(candidate.course.trim())
        .bind(candidate.date_of_birth)
        .execute(&self.pool)
        .await?;

        let record =
            sqlx::query_as::<_, StudentRecord>("SELECT * FROM students WHERE id = ?")
                .bind(result.last_insert_rowid())
                .fetch_one(&self.pool)
                .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let records = sqlx::query_as::<_, StudentRecord>(
            "SELECT * FROM students ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<StudentRecord>, StoreError> {
        let record = sqlx::query_as::<_, StudentRecord>("SELECT * FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<StudentRecord>, StoreError> {
        let record = sqlx::query_as::<_, StudentRecord>("SELECT * FROM students WHERE email = ?")
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }
}
