//! Assignment ledger model.
//!
//! The ledger is the engine's output: one record per assigned student,
//! in processing order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A student-to-faculty assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Assigned student's name.
    pub student_name: String,
    /// Assigned student's identifier.
    pub student_id: String,
    /// Faculty the student was assigned to.
    pub faculty_name: String,
}

/// Ordered list of assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentLedger {
    records: Vec<AssignmentRecord>,
}

impl AssignmentRecord {
    /// Creates an assignment record.
    pub fn new(
        student_name: impl Into<String>,
        student_id: impl Into<String>,
        faculty_name: impl Into<String>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            student_id: student_id.into(),
            faculty_name: faculty_name.into(),
        }
    }
}

impl AssignmentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: AssignmentRecord) {
        self.records.push(record);
    }

    /// Records in processing order.
    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    /// Iterates records in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record for the given student.
    pub fn record_for_student(&self, name: &str, id: &str) -> Option<&AssignmentRecord> {
        self.records
            .iter()
            .find(|r| r.student_name == name && r.student_id == id)
    }

    /// Number of assigned students per faculty.
    pub fn counts_by_faculty(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for r in &self.records {
            *counts.entry(r.faculty_name.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a AssignmentLedger {
    type Item = &'a AssignmentRecord;
    type IntoIter = std::slice::Iter<'a, AssignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
