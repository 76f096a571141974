//! Input validation for assignment problems.
//!
//! Checks the preference ledger and faculty table before a run and
//! reports every issue found. The engine never calls this and runs on
//! any input; callers decide whether an issue is worth stopping for.
//!
//! Detects:
//! - An empty faculty table (every student would go unassigned)
//! - Duplicate faculty names (lookups only ever see the first)
//! - Duplicate students (same name and ID)
//! - Preferences naming no faculty
//! - Negative current loads

use crate::models::{FacultyTable, StudentPreference};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

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
    /// The faculty table has no records.
    EmptyFacultyTable,
    /// Two faculty records share a name.
    DuplicateFaculty,
    /// Two students share a name and ID.
    DuplicateStudent,
    /// A non-blank preference names no faculty in the table.
    UnknownPreference,
    /// A faculty's current load is below zero.
    NegativeLoad,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the inputs of an assignment run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(students: &[StudentPreference], faculty: &FacultyTable) -> ValidationResult {
    let mut errors = Vec::new();

    if faculty.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyFacultyTable,
            "Faculty table is empty",
        ));
    }

    let mut faculty_names = HashSet::new();
    for f in faculty {
        if !faculty_names.insert(f.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateFaculty,
                format!("Duplicate faculty name: {}", f.name),
            ));
        }
        if f.current_load < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeLoad,
                format!("Faculty '{}' has negative current load {}", f.name, f.current_load),
            ));
        }
    }

    let mut student_keys = HashSet::new();
    for s in students {
        if !student_keys.insert((s.name.as_str(), s.id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStudent,
                format!("Duplicate student: {} ({})", s.name, s.id),
            ));
        }

        let mut reported = HashSet::new();
        for pref in &s.preferences {
            if pref.is_empty() || faculty_names.contains(pref.as_str()) {
                continue;
            }
            if reported.insert(pref.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPreference,
                    format!(
                        "Student '{}' ({}) prefers unknown faculty '{}'",
                        s.name, s.id, pref
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
