//! Student preference model.
//!
//! One record per student: identity, opaque GPA columns, and an ordered
//! list of preferred faculty names. Records are immutable once loaded;
//! the engine only reads them.

use serde::{Deserialize, Serialize};

/// Maximum number of ranked preferences carried per student.
pub const MAX_PREFERENCES: usize = 14;

/// A student's ranked supervisor preferences.
///
/// Equality is full-record equality (every field, including the GPA columns).
/// The assignment engine relies on it for its "already assigned" lookahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPreference {
    /// Student name.
    pub name: String,
    /// Student identifier.
    pub id: String,
    /// GPA columns as read from input. Not interpreted by the engine.
    pub gpa_fields: Vec<String>,
    /// Faculty names in rank order (rank 1 first). May contain blanks or repeats.
    pub preferences: Vec<String>,
}

impl StudentPreference {
    /// Creates a student with no GPA fields and no preferences.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            gpa_fields: Vec::new(),
            preferences: Vec::new(),
        }
    }

    /// Sets the GPA columns.
    pub fn with_gpa_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gpa_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one preference at the next rank.
    pub fn with_preference(mut self, faculty: impl Into<String>) -> Self {
        self.preferences.push(faculty.into());
        self
    }

    /// Replaces the preference list.
    pub fn with_preferences<I, S>(mut self, faculties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = faculties.into_iter().map(Into::into).collect();
        self
    }

    /// 1-based rank of the first occurrence of `faculty`, if listed.
    pub fn rank_of(&self, faculty: &str) -> Option<usize> {
        self.preferences
            .iter()
            .position(|p| p == faculty)
            .map(|idx| idx + 1)
    }

    /// Whether this record describes the given `(name, id)` pair.
    #[inline]
    pub fn is_identified_by(&self, name: &str, id: &str) -> bool {
        self.name == name && self.id == id
    }
}
