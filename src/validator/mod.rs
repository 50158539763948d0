//! Field validation for student records.
//!
//! One implementation shared by every entry point, so a record can never
//! pass one caller's checks and fail another's. All functions are pure and
//! synchronous; date-of-birth validation takes the evaluation date as an
//! argument so callers (and tests) fix the clock explicitly.

mod errors;
mod rules;

pub use errors::{FieldIssue, IssueKind};
pub use rules::{
    validate_course, validate_date_of_birth, validate_email, validate_form, validate_name,
    FormErrors,
};
