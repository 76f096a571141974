//! Faculty capacity model.
//!
//! Each faculty member carries a current load (students already supervised)
//! and a requested load (remaining open demand). The table is an explicitly
//! ordered sequence: lookups return the first match in table order, and
//! [`FacultyTable::sort_by_current_load`] permanently reorders it.

use serde::{Deserialize, Serialize};

/// A faculty member's capacity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRecord {
    /// Faculty name (lookup key).
    pub name: String,
    /// Number of students currently supervised.
    pub current_load: i32,
    /// Remaining open demand. Forced placements may drive it below zero.
    pub requested_load: i32,
}

impl FacultyRecord {
    /// Creates a faculty record.
    pub fn new(name: impl Into<String>, current_load: i32, requested_load: i32) -> Self {
        Self {
            name: name.into(),
            current_load,
            requested_load,
        }
    }

    /// Whether the faculty still asks for students.
    #[inline]
    pub fn has_open_demand(&self) -> bool {
        self.requested_load > 0
    }

    /// Whether the faculty can accept a student under `load_cap` with open demand.
    #[inline]
    pub fn accepts_under(&self, load_cap: i32) -> bool {
        self.current_load < load_cap && self.has_open_demand()
    }

    /// Records one more supervised student.
    ///
    /// Increments the current load and decrements the requested load
    /// unconditionally. Both saturate at the `i32` bounds.
    pub fn take_student(&mut self) {
        self.current_load = self.current_load.saturating_add(1);
        self.requested_load = self.requested_load.saturating_sub(1);
    }
}

/// Ordered, mutable faculty capacity table.
///
/// No records are inserted or removed after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacultyTable {
    records: Vec<FacultyRecord>,
}

impl FacultyTable {
    /// Creates a table in the given order.
    pub fn new(records: Vec<FacultyRecord>) -> Self {
        Self { records }
    }

    /// Number of faculty records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in current table order.
    pub fn records(&self) -> &[FacultyRecord] {
        &self.records
    }

    /// Iterates records in current table order.
    pub fn iter(&self) -> std::slice::Iter<'_, FacultyRecord> {
        self.records.iter()
    }

    /// Position of the first record named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|f| f.name == name)
    }

    /// First record named `name`.
    pub fn get(&self, name: &str) -> Option<&FacultyRecord> {
        self.records.iter().find(|f| f.name == name)
    }

    /// Mutable record at a table position.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut FacultyRecord> {
        self.records.get_mut(index)
    }

    /// Stable sort by ascending current load.
    ///
    /// The new order persists for every later lookup.
    pub fn sort_by_current_load(&mut self) {
        self.records.sort_by_key(|f| f.current_load);
    }

    /// Smallest current load in the table.
    pub fn min_current_load(&self) -> Option<i32> {
        self.records.iter().map(|f| f.current_load).min()
    }

    /// Positions of records at `load`, in table order.
    pub fn positions_at_load(&self, load: i32) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, f)| f.current_load == load)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Positions of records that accept a student under `load_cap`, in table order.
    pub fn positions_accepting_under(&self, load_cap: i32) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, f)| f.accepts_under(load_cap))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Sum of current loads across the table.
    pub fn total_load(&self) -> i64 {
        self.records.iter().map(|f| i64::from(f.current_load)).sum()
    }
}

impl<'a> IntoIterator for &'a FacultyTable {
    type Item = &'a FacultyRecord;
    type IntoIter = std::slice::Iter<'a, FacultyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
