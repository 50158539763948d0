//! Field rules for the student registration form.
//!
//! Rules:
//! - name: 2-100 chars after trimming, ASCII letters and whitespace only
//! - email: `local@domain.tld` shape (single '@', a '.' after it, no
//!   whitespace), not full RFC 5322
//! - course: 2-100 chars after trimming, free-form text
//! - date_of_birth: ISO `YYYY-MM-DD`, strictly in the past, implied age
//!   between 16 and 100 inclusive at the evaluation date

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::errors::{FieldIssue, IssueKind};

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 100;
const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 100;

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid regex"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

/// Validate a student name.
pub fn validate_name(name: &str) -> Option<FieldIssue> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some(FieldIssue::new(IssueKind::Required, "Name is required"));
    }
    if trimmed.chars().count() < MIN_LEN {
        return Some(FieldIssue::new(
            IssueKind::TooShort,
            "Name must be at least 2 characters long",
        ));
    }
    if trimmed.chars().count() > MAX_LEN {
        return Some(FieldIssue::new(
            IssueKind::TooLong,
            "Name must not exceed 100 characters",
        ));
    }
    if !name_pattern().is_match(trimmed) {
        return Some(FieldIssue::new(
            IssueKind::InvalidCharacters,
            "Name can only contain letters and spaces",
        ));
    }
    None
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Option<FieldIssue> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some(FieldIssue::new(IssueKind::Required, "Email is required"));
    }
    if !email_pattern().is_match(trimmed) {
        return Some(FieldIssue::new(
            IssueKind::InvalidFormat,
            "Please enter a valid email address",
        ));
    }
    None
}

/// Validate a course name.
pub fn validate_course(course: &str) -> Option<FieldIssue> {
    let trimmed = course.trim();
    if trimmed.is_empty() {
        return Some(FieldIssue::new(IssueKind::Required, "Course is required"));
    }
    if trimmed.chars().count() < MIN_LEN {
        return Some(FieldIssue::new(
            IssueKind::TooShort,
            "Course must be at least 2 characters long",
        ));
    }
    if trimmed.chars().count() > MAX_LEN {
        return Some(FieldIssue::new(
            IssueKind::TooLong,
            "Course must not exceed 100 characters",
        ));
    }
    None
}

/// Validate a date of birth against the given evaluation date.
///
/// Age uses the exact calendar-anniversary rule: the year difference,
/// minus one if the anniversary has not yet occurred this year.
pub fn validate_date_of_birth(date_of_birth: &str, today: NaiveDate) -> Option<FieldIssue> {
    let trimmed = date_of_birth.trim();
    if trimmed.is_empty() {
        return Some(FieldIssue::new(
            IssueKind::Required,
            "Date of birth is required",
        ));
    }

    let birth = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return Some(FieldIssue::new(
                IssueKind::InvalidDate,
                "Please enter a valid date",
            ))
        }
    };

    if birth >= today {
        return Some(FieldIssue::new(
            IssueKind::NotPast,
            "Date of birth must be in the past",
        ));
    }

    let age = age_at(birth, today);
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Some(FieldIssue::new(
            IssueKind::OutOfAgeRange,
            "Student must be between 16 and 100 years old",
        ));
    }

    None
}

/// Whole years between `birth` and `today`, counting anniversaries.
fn age_at(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Per-field validation outcome for a whole form.
///
/// Every field is always checked; failures are never short-circuited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldIssue>,
    pub email: Option<FieldIssue>,
    pub course: Option<FieldIssue>,
    pub date_of_birth: Option<FieldIssue>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.course.is_none()
            && self.date_of_birth.is_none()
    }

    /// Failures in fixed field order, paired with their field names.
    pub fn issues(&self) -> Vec<(&'static str, FieldIssue)> {
        let mut out = Vec::new();
        if let Some(issue) = self.name {
            out.push(("name", issue));
        }
        if let Some(issue) = self.email {
            out.push(("email", issue));
        }
        if let Some(issue) = self.course {
            out.push(("course", issue));
        }
        if let Some(issue) = self.date_of_birth {
            out.push(("date_of_birth", issue));
        }
        out
    }
}

/// Validate all four form fields, returning a field -> issue mapping.
pub fn validate_form(
    name: &str,
    email: &str,
    course: &str,
    date_of_birth: &str,
    today: NaiveDate,
) -> FormErrors {
    FormErrors {
        name: validate_name(name),
        email: validate_email(email),
        course: validate_course(course),
        date_of_birth: validate_date_of_birth(date_of_birth, today),
    }
}
