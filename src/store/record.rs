//! The student record and its creation candidate.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A persisted student.
///
/// `id`, `created_at` and `updated_at` are engine-assigned at insert time
/// and never settable by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    pub date_of_birth: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// The caller-supplied fields of a new student, validated upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: String,
    pub date_of_birth: NaiveDate,
}

impl NewStudent {
    /// Email as stored: trimmed and lowercased. Lookups apply the same
    /// normalization for consistent results.
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

/// Canonical form of an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
