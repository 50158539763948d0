//! Store error taxonomy.
//!
//! Engine-specific constraint-violation signaling is normalized to one
//! error kind here; callers never see sqlite or MySQL error codes.

use thiserror::Error;

/// Errors surfaced by a [`super::StudentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email uniqueness constraint rejected an insert.
    #[error("Email already exists")]
    DuplicateEmail,

    /// The engine could not be reached or initialized.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Any other engine failure; surfaced as a generic internal error at
    /// the HTTP boundary.
    #[error("storage backend error: {0}")]
    Backend(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Backend(err)
    }
}
