//! Networked MySQL engine.
//!
//! Opt-in: requires host and credentials from configuration. Connect first
//! reaches the server without a database selected and issues
//! `CREATE DATABASE IF NOT EXISTS`, matching a fresh deployment where the
//! database does not exist yet. A short acquire timeout bounds connection
//! attempts so an unreachable server fails fast into the sqlite fallback.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Connection, MySqlConnection, MySqlPool};

use crate::config::MySqlConfig;

use super::errors::StoreError;
use super::record::{normalize_email, NewStudent, StudentRecord};
use super::StudentStore;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS students (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) UNIQUE NOT NULL,
    course VARCHAR(255) NOT NULL,
    date_of_birth DATE NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// Student store backed by a networked MySQL server.
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Reach the server, ensure the database and schema, and open the pool.
    pub async fn connect(config: &MySqlConfig) -> Result<Self, StoreError> {
        let server_options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password);

        // The target database may not exist yet; create it from a
        // database-less connection before opening the pool.
        let mut conn = MySqlConnection::connect_with(&server_options)
            .await
            .map_err(StoreError::Unavailable)?;
        sqlx::query(&format!(
            "CREATE DATABASE IF NOT EXISTS {}",
            config.database
        ))
        .execute(&mut conn)
        .await
        .map_err(StoreError::Unavailable)?;
        let _ = conn.close().await;

        let pool = MySqlPoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(server_options.database(&config.database))
            .await
            .map_err(StoreError::Unavailable)?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }
}

#[async_trait]
impl StudentStore for MySqlStore {
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
                .bind(result.last_insert_id() as i64)
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
