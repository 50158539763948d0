//! Validator rule tests
//!
//! Field rules for the registration form:
//! - name: 2-100 trimmed chars, letters and whitespace only
//! - email: local@domain.tld shape
//! - course: 2-100 trimmed chars, free-form
//! - date_of_birth: past date, age 16-100 by exact calendar anniversary
//!
//! All date-of-birth checks run against a fixed evaluation date so the
//! results never depend on the wall clock.

use chrono::NaiveDate;
use studentreg::validator::{
    validate_course, validate_date_of_birth, validate_email, validate_form, validate_name,
    IssueKind,
};

fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

// =============================================================================
// Name
// =============================================================================

#[test]
fn test_name_with_digit_is_invalid_characters() {
    for name in ["John3", "4lice", "Jane 2nd"] {
        let issue = validate_name(name).unwrap();
        assert_eq!(issue.kind, IssueKind::InvalidCharacters, "name: {name}");
    }
}

#[test]
fn test_name_with_punctuation_is_invalid_characters() {
    for name in ["O'Brien", "Smith-Jones", "Dr. Who", "Anna!"] {
        let issue = validate_name(name).unwrap();
        assert_eq!(issue.kind, IssueKind::InvalidCharacters, "name: {name}");
    }
}

#[test]
fn test_name_length_bounds() {
    assert_eq!(validate_name("J").unwrap().kind, IssueKind::TooShort);
    assert!(validate_name("Jo").is_none());
    assert!(validate_name(&"a".repeat(100)).is_none());
    assert_eq!(
        validate_name(&"a".repeat(101)).unwrap().kind,
        IssueKind::TooLong
    );
}

#[test]
fn test_name_length_measured_after_trimming() {
    // Padding does not rescue a one-char name
    assert_eq!(validate_name("   J   ").unwrap().kind, IssueKind::TooShort);
}

#[test]
fn test_empty_name_is_required() {
    assert_eq!(validate_name("").unwrap().kind, IssueKind::Required);
    assert_eq!(validate_name("   ").unwrap().kind, IssueKind::Required);
}

#[test]
fn test_name_allows_interior_whitespace() {
    assert!(validate_name("John Ronald Reuel Tolkien").is_none());
}

// =============================================================================
// Email
// =============================================================================

#[test]
fn test_email_accepts_simple_addresses() {
    for email in ["john@x.com", "a.b@sub.domain.org", "x@y.co"] {
        assert!(validate_email(email).is_none(), "email: {email}");
    }
}

#[test]
fn test_email_rejects_malformed_addresses() {
    for email in [
        "bad-email",
        "no-at.example.com",
        "two@@x.com",
        "spaces in@x.com",
        "trailing@nodot",
    ] {
        let issue = validate_email(email).unwrap();
        assert_eq!(issue.kind, IssueKind::InvalidFormat, "email: {email}");
    }
}

#[test]
fn test_empty_email_is_required() {
    assert_eq!(validate_email("  ").unwrap().kind, IssueKind::Required);
}

// =============================================================================
// Course
// =============================================================================

#[test]
fn test_course_length_bounds() {
    assert_eq!(validate_course("A").unwrap().kind, IssueKind::TooShort);
    assert!(validate_course("CS").is_none());
    assert!(validate_course(&"c".repeat(100)).is_none());
    assert_eq!(
        validate_course(&"c".repeat(101)).unwrap().kind,
        IssueKind::TooLong
    );
}

#[test]
fn test_course_has_no_character_restriction() {
    assert!(validate_course("Intro to C++ (2024, §1)").is_none());
}

// =============================================================================
// Date of birth
// =============================================================================

#[test]
fn test_sixteenth_birthday_today_is_accepted() {
    assert!(validate_date_of_birth("2008-06-15", eval_date()).is_none());
}

#[test]
fn test_one_day_short_of_sixteen_is_rejected() {
    let issue = validate_date_of_birth("2008-06-16", eval_date()).unwrap();
    assert_eq!(issue.kind, IssueKind::OutOfAgeRange);
}

#[test]
fn test_hundredth_birthday_today_is_accepted() {
    assert!(validate_date_of_birth("1924-06-15", eval_date()).is_none());
}

#[test]
fn test_over_one_hundred_is_rejected() {
    let issue = validate_date_of_birth("1923-06-15", eval_date()).unwrap();
    assert_eq!(issue.kind, IssueKind::OutOfAgeRange);
}

#[test]
fn test_future_date_is_not_past() {
    let issue = validate_date_of_birth("2030-01-01", eval_date()).unwrap();
    assert_eq!(issue.kind, IssueKind::NotPast);
}

#[test]
fn test_today_is_not_past() {
    let issue = validate_date_of_birth("2024-06-15", eval_date()).unwrap();
    assert_eq!(issue.kind, IssueKind::NotPast);
}

#[test]
fn test_unparseable_date_is_invalid() {
    for raw in ["nope", "2024-13-40", "01/02/2000"] {
        let issue = validate_date_of_birth(raw, eval_date()).unwrap();
        assert_eq!(issue.kind, IssueKind::InvalidDate, "raw: {raw}");
    }
}

#[test]
fn test_empty_date_is_required() {
    let issue = validate_date_of_birth("", eval_date()).unwrap();
    assert_eq!(issue.kind, IssueKind::Required);
}

// =============================================================================
// Whole-form validation
// =============================================================================

/// Short name passes (2 chars), email fails format, course fails length,
/// date of birth fails the age floor: exactly three field errors.
#[test]
fn test_mixed_form_reports_three_errors() {
    let errors = validate_form("Jo", "bad-email", "A", "2010-01-01", eval_date());
    assert!(!errors.is_valid());

    let fields: Vec<&str> = errors.issues().iter().map(|(field, _)| *field).collect();
    assert_eq!(fields, vec!["email", "course", "date_of_birth"]);
}

#[test]
fn test_valid_form_has_no_errors() {
    let errors = validate_form(
        "John Doe",
        "john@x.com",
        "Computer Science",
        "2000-01-01",
        eval_date(),
    );
    assert!(errors.is_valid());
    assert!(errors.issues().is_empty());
}

#[test]
fn test_all_fields_checked_not_short_circuited() {
    let errors = validate_form("", "", "", "", eval_date());
    assert_eq!(errors.issues().len(), 4);
    for (_, issue) in errors.issues() {
        assert_eq!(issue.kind, IssueKind::Required);
    }
}
