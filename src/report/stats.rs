//! Preference satisfaction statistics.
//!
//! For each assigned student, finds the rank of the assigned faculty in
//! the student's own preference list.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Rank count | Students assigned to their r-th preference (first occurrence) |
//! | Outside preference | Assigned students whose faculty they never listed |
//! | Distribution | Counts at positions 1..=14, then position 0 for outside |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{AssignmentLedger, StudentPreference, MAX_PREFERENCES};

/// Where one assigned student landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Student name.
    pub student_name: String,
    /// Student identifier.
    pub student_id: String,
    /// Assigned faculty.
    pub faculty_name: String,
    /// 1-based preference rank, `None` if outside the student's list.
    pub rank: Option<usize>,
}

/// Preference satisfaction report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreferenceReport {
    /// Assigned-student count per preference rank. Only ranks that occur.
    pub rank_counts: BTreeMap<usize, usize>,
    /// Assigned students whose faculty is not in their preference list.
    pub outside_preference: usize,
    /// Per-student placements, in preference ledger order.
    pub placements: Vec<Placement>,
}

impl PreferenceReport {
    /// Computes the report from a run's ledger and its input students.
    ///
    /// Students without an assignment are skipped. Neither input is modified.
    pub fn calculate(ledger: &AssignmentLedger, students: &[StudentPreference]) -> Self {
        let mut report = Self::default();

        for student in students {
            let Some(record) = ledger.record_for_student(&student.name, &student.id) else {
                continue;
            };
            let rank = student.rank_of(&record.faculty_name);
            match rank {
                Some(r) => *report.rank_counts.entry(r).or_insert(0) += 1,
                None => report.outside_preference += 1,
            }
            report.placements.push(Placement {
                student_name: student.name.clone(),
                student_id: student.id.clone(),
                faculty_name: record.faculty_name.clone(),
                rank,
            });
        }

        report
    }

    /// Number of students assigned to preference `rank`.
    pub fn count_at_rank(&self, rank: usize) -> usize {
        self.rank_counts.get(&rank).copied().unwrap_or(0)
    }

    /// Number of students placed (inside or outside their preferences).
    pub fn assigned_count(&self) -> usize {
        self.placements.len()
    }

    /// Students assigned to preference `rank`.
    pub fn students_at_rank(&self, rank: usize) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.rank == Some(rank))
            .collect()
    }

    /// Students assigned outside their preference list.
    pub fn students_outside_preference(&self) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.rank.is_none()).collect()
    }

    /// `(position, count)` for positions 1..=14, then 0 (outside preference).
    pub fn distribution(&self) -> Vec<(usize, usize)> {
        (1..=MAX_PREFERENCES)
            .map(|rank| (rank, self.count_at_rank(rank)))
            .chain(std::iter::once((0, self.outside_preference)))
            .collect()
    }

    /// Fraction of assigned students who got their first preference.
    pub fn first_choice_rate(&self) -> f64 {
        if self.placements.is_empty() {
            0.0
        } else {
            self.count_at_rank(1) as f64 / self.placements.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssignmentRecord;

    fn students() -> Vec<StudentPreference> {
        vec![
            StudentPreference::new("S1", "1").with_preferences(["A", "B"]),
            StudentPreference::new("S2", "2").with_preferences(["A", "B", "B"]),
            StudentPreference::new("S3", "3").with_preferences(["A"]),
            StudentPreference::new("S4", "4").with_preferences(["C"]),
            StudentPreference::new("S5", "5").with_preferences(["B", "A"]),
        ]
    }

    fn ledger() -> AssignmentLedger {
        let mut l = AssignmentLedger::new();
        l.push(AssignmentRecord::new("S1", "1", "A"));
        l.push(AssignmentRecord::new("S2", "2", "B"));
        l.push(AssignmentRecord::new("S3", "3", "C"));
        l.push(AssignmentRecord::new("S5", "5", "B"));
        l
    }

    #[test]
    fn test_rank_counts() {
        let r = PreferenceReport::calculate(&ledger(), &students());
        assert_eq!(r.count_at_rank(1), 2); // S1, S5
        assert_eq!(r.count_at_rank(2), 1); // S2, first occurrence of B
        assert_eq!(r.count_at_rank(3), 0);
        assert_eq!(r.outside_preference, 1); // S3
        assert_eq!(r.assigned_count(), 4); // S4 unassigned
    }

    #[test]
    fn test_student_lists() {
        let r = PreferenceReport::calculate(&ledger(), &students());
        let firsts: Vec<_> = r
            .students_at_rank(1)
            .iter()
            .map(|p| p.student_name.as_str())
            .collect();
        assert_eq!(firsts, vec!["S1", "S5"]);

        let outside = r.students_outside_preference();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].faculty_name, "C");
    }

    #[test]
    fn test_distribution_layout() {
        let r = PreferenceReport::calculate(&ledger(), &students());
        let d = r.distribution();
        assert_eq!(d.len(), MAX_PREFERENCES + 1);
        assert_eq!(d[0], (1, 2));
        assert_eq!(d[1], (2, 1));
        assert_eq!(d[MAX_PREFERENCES - 1], (14, 0));
        assert_eq!(d[MAX_PREFERENCES], (0, 1));
    }

    #[test]
    fn test_first_choice_rate() {
        let r = PreferenceReport::calculate(&ledger(), &students());
        assert!((r.first_choice_rate() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_report() {
        let r = PreferenceReport::calculate(&AssignmentLedger::new(), &students());
        assert!(r.rank_counts.is_empty());
        assert_eq!(r.outside_preference, 0);
        assert!((r.first_choice_rate() - 0.0).abs() < 1e-10);
        assert!(r.distribution().iter().all(|&(_, c)| c == 0));
    }
}
