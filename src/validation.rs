//! Input validation for timetable data.
//!
//! The generator assumes well-formed sections. These checks run at the
//! ingestion boundary and detect:
//! - Empty course names or section codes
//! - Sections with no meeting days
//! - Non-finite, out-of-range, or non-positive time intervals
//! - Duplicate course names and duplicate section codes
//!
//! All issues are collected, not just the first one.

use crate::models::{Course, SectionRecord};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Latest hour a section may end at.
pub const MAX_HOUR: f64 = 24.0;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same key.
    DuplicateId,
    /// Course name is blank.
    EmptyCourseName,
    /// Section code is blank.
    EmptySectionCode,
    /// Section meets on no day.
    EmptyDays,
    /// Hour is NaN/infinite or outside `0..=24`.
    HourOutOfRange,
    /// Start hour is not before end hour.
    InvalidInterval,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a single ingestion record.
pub fn validate_record(record: &SectionRecord) -> ValidationResult {
    let mut errors = Vec::new();

    if record.course.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCourseName,
            "Course name is empty",
        ));
    }
    if record.code.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySectionCode,
            format!("Section code is empty in course '{}'", record.course),
        ));
    }
    let label = format!("{}/{}", record.course, record.code);
    check_days(&label, record.days.iter().map(String::as_str), &mut errors);
    check_interval(&label, record.start_hour, record.end_hour, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a snapshot of courses before generation.
///
/// Checks:
/// 1. No duplicate course names
/// 2. No duplicate section codes within a course
/// 3. Every section meets on at least one day
/// 4. Every section has a finite, in-range, positive interval
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for course in courses {
        if !names.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course name: {}", course.name),
            ));
        }

        let mut codes = HashSet::new();
        for section in &course.sections {
            if !codes.insert(section.code.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!(
                        "Duplicate section code '{}' in course '{}'",
                        section.code, course.name
                    ),
                ));
            }
            let label = format!("{}/{}", course.name, section.code);
            check_days(&label, section.days.iter().map(String::as_str), &mut errors);
            check_interval(&label, section.start_hour, section.end_hour, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_days<'a>(
    label: &str,
    days: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut any = false;
    for day in days {
        any = true;
        if day.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDays,
                format!("Section '{label}' has a blank day label"),
            ));
        }
    }
    if !any {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDays,
            format!("Section '{label}' meets on no day"),
        ));
    }
}

fn check_interval(label: &str, start: f64, end: f64, errors: &mut Vec<ValidationError>) {
    let in_range = |h: f64| h.is_finite() && (0.0..=MAX_HOUR).contains(&h);
    if !in_range(start) || !in_range(end) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HourOutOfRange,
            format!("Section '{label}' has hours outside 0-{MAX_HOUR}: {start}-{end}"),
        ));
        return;
    }
    if start >= end {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInterval,
            format!("Section '{label}' starts at {start} but ends at {end}"),
        ));
    }
}
