//! Validation diagnostics.

use std::fmt;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Empty after trimming
    Required,
    /// Trimmed length below the minimum
    TooShort,
    /// Trimmed length above the maximum
    TooLong,
    /// Contains characters outside the allowed class
    InvalidCharacters,
    /// Does not match the expected pattern
    InvalidFormat,
    /// Not a parseable calendar date
    InvalidDate,
    /// Date is not strictly in the past
    NotPast,
    /// Implied age outside the accepted range
    OutOfAgeRange,
}

/// A single field-level validation failure.
///
/// The message is the human-readable text returned to form users; the kind
/// is what tests and programmatic callers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub kind: IssueKind,
    pub message: &'static str,
}

impl FieldIssue {
    pub const fn new(kind: IssueKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
