//! Tiered greedy assignment.
//!
//! # Algorithm
//!
//! For each student in ledger order:
//! 1. **Tier 0**: scan preferences in rank order; take the first faculty
//!    under the preferred cap with open demand. While the courtesy token is
//!    available, a faculty under the absolute cap with open demand also
//!    qualifies, and spends the token.
//! 2. **Tier 1**: among faculties under the absolute cap with open demand,
//!    take the least loaded; ties broken by the [`TieBreaker`].
//! 3. **Tier 2**: sort the table by load. Among the minimum-load faculties,
//!    take a preferred one if any (2a); otherwise prefer one that no
//!    remaining student lists (2b). Requested load may go negative here.
//!
//! # Lookahead
//! "Remaining students" are all ledger students whose record equals neither
//! a tracked record nor the current student. Tiers 0 and 2 track the student
//! they place; Tier 1 does not, so a Tier 1 student's preferences keep
//! reserving faculties for the rest of the run.
//!
//! # Complexity
//! O(n * (p * f + n * p)) worst case, n=students, p=preferences, f=faculties.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{CourtesyToken, EngineConfig, MatchTier, StudentOutcome, TieBreaker};
use crate::models::{AssignmentLedger, AssignmentRecord, FacultyTable, StudentPreference};

/// Result of one engine run.
///
/// The faculty table passed to [`AssignmentEngine::assign`] is the other
/// observable output; it is mutated in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentRun {
    /// Assignments in processing order.
    pub ledger: AssignmentLedger,
    /// One outcome per input student, in ledger order.
    pub outcomes: Vec<StudentOutcome>,
    /// Courtesy token state at the end of the run.
    pub courtesy: CourtesyToken,
}

impl AssignmentRun {
    /// Number of assigned students.
    pub fn assigned_count(&self) -> usize {
        self.ledger.len()
    }

    /// Ledger indices of students left unassigned.
    pub fn unassigned(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_assigned())
            .map(StudentOutcome::student_index)
            .collect()
    }

    /// Number of assignments produced by `tier`.
    pub fn count_by_tier(&self, tier: MatchTier) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.tier() == Some(tier))
            .count()
    }
}

/// Greedy student-to-faculty assignment engine.
///
/// # Example
///
/// ```
/// use u_assign::engine::{AssignmentEngine, FirstCandidate, MatchTier};
/// use u_assign::models::{FacultyRecord, FacultyTable, StudentPreference};
///
/// let students = vec![
///     StudentPreference::new("S1", "1").with_preference("A"),
///     StudentPreference::new("S2", "2").with_preference("A"),
/// ];
/// let mut table = FacultyTable::new(vec![
///     FacultyRecord::new("A", 3, 2),
///     FacultyRecord::new("B", 3, 2),
/// ]);
///
/// let mut engine = AssignmentEngine::new(FirstCandidate);
/// let run = engine.assign(&students, &mut table);
/// assert_eq!(run.outcomes[0].tier(), Some(MatchTier::Courtesy));
/// assert_eq!(run.outcomes[1].tier(), Some(MatchTier::LeastLoaded));
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentEngine<T> {
    config: EngineConfig,
    tie_breaker: T,
}

impl<T: TieBreaker> AssignmentEngine<T> {
    /// Creates an engine with default load caps.
    pub fn new(tie_breaker: T) -> Self {
        Self {
            config: EngineConfig::default(),
            tie_breaker,
        }
    }

    /// Sets the load caps.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assigns every student, mutating `table` in place.
    ///
    /// Each call starts with a fresh courtesy token.
    pub fn assign(
        &mut self,
        students: &[StudentPreference],
        table: &mut FacultyTable,
    ) -> AssignmentRun {
        let mut run = AssignmentRun::default();
        let mut tracked: Vec<usize> = Vec::new();

        for (index, student) in students.iter().enumerate() {
            let outcome =
                self.assign_student(index, students, table, &mut run.courtesy, &mut tracked);

            match &outcome {
                StudentOutcome::Assigned { faculty, tier, .. } => {
                    debug!(
                        "assigned {} ({}) to {} via {}",
                        student.name, student.id, faculty, tier
                    );
                    run.ledger.push(AssignmentRecord::new(
                        &student.name,
                        &student.id,
                        faculty.as_str(),
                    ));
                }
                StudentOutcome::Unassigned { .. } => {
                    warn!(
                        "no available faculty for student {} with ID {}",
                        student.name, student.id
                    );
                }
            }
            run.outcomes.push(outcome);
        }

        info!(
            "assigned {}/{} students across {} faculty ({} by preference, {} forced)",
            run.assigned_count(),
            students.len(),
            table.len(),
            run.outcomes
                .iter()
                .filter_map(StudentOutcome::tier)
                .filter(|t| t.honors_preference())
                .count(),
            run.outcomes
                .iter()
                .filter_map(StudentOutcome::tier)
                .filter(|t| t.is_forced())
                .count(),
        );

        run
    }

    fn assign_student(
        &mut self,
        index: usize,
        students: &[StudentPreference],
        table: &mut FacultyTable,
        courtesy: &mut CourtesyToken,
        tracked: &mut Vec<usize>,
    ) -> StudentOutcome {
        let student = &students[index];

        if let Some((pos, tier)) = self.match_preferred(student, table, courtesy) {
            tracked.push(index);
            return commit(index, table, pos, tier);
        }

        // Tier 1 leaves the student untracked.
        if let Some(pos) = self.match_least_loaded(table) {
            return commit(index, table, pos, MatchTier::LeastLoaded);
        }

        if let Some((pos, tier)) = self.match_forced(index, students, table, tracked) {
            tracked.push(index);
            return commit(index, table, pos, tier);
        }

        StudentOutcome::Unassigned {
            student_index: index,
        }
    }

    /// Tier 0.
    fn match_preferred(
        &self,
        student: &StudentPreference,
        table: &FacultyTable,
        courtesy: &mut CourtesyToken,
    ) -> Option<(usize, MatchTier)> {
        for preference in &student.preferences {
            let Some(pos) = table.position(preference) else {
                continue;
            };
            let faculty = &table.records()[pos];

            if faculty.accepts_under(self.config.preferred_load_cap) {
                return Some((pos, MatchTier::Preferred));
            }
            if courtesy.is_available()
                && faculty.accepts_under(self.config.absolute_load_cap)
                && courtesy.spend(&faculty.name)
            {
                info!(
                    "courtesy relaxation: {} ({}) admitted to {} at load {}",
                    student.name, student.id, faculty.name, faculty.current_load
                );
                return Some((pos, MatchTier::Courtesy));
            }
        }
        None
    }

    /// Tier 1.
    fn match_least_loaded(&mut self, table: &FacultyTable) -> Option<usize> {
        let records = table.records();
        let open = table.positions_accepting_under(self.config.absolute_load_cap);
        let min_load = open.iter().map(|&p| records[p].current_load).min()?;
        let tied: Vec<usize> = open
            .into_iter()
            .filter(|&p| records[p].current_load == min_load)
            .collect();
        self.pick(&tied)
    }

    /// Tier 2. Reorders the table.
    fn match_forced(
        &mut self,
        index: usize,
        students: &[StudentPreference],
        table: &mut FacultyTable,
        tracked: &[usize],
    ) -> Option<(usize, MatchTier)> {
        table.sort_by_current_load();
        let min_load = table.min_current_load()?;
        let candidates = table.positions_at_load(min_load);
        let records = table.records();

        for preference in &students[index].preferences {
            if let Some(&pos) = candidates.iter().find(|&&p| records[p].name == *preference) {
                return Some((pos, MatchTier::ForcedPreferred));
            }
        }

        let wanted = future_preferences(index, students, tracked);
        let unwanted: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&p| !wanted.contains(records[p].name.as_str()))
            .collect();
        if let Some(pos) = self.pick(&unwanted) {
            return Some((pos, MatchTier::ForcedReserved));
        }

        let fallback = table.positions_at_load(min_load);
        self.pick(&fallback).map(|pos| (pos, MatchTier::ForcedAny))
    }

    fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            n => candidates.get(self.tie_breaker.choose(n)).copied(),
        }
    }
}

/// Applies an assignment to the table.
fn commit(index: usize, table: &mut FacultyTable, pos: usize, tier: MatchTier) -> StudentOutcome {
    match table.at_mut(pos) {
        Some(faculty) => {
            faculty.take_student();
            StudentOutcome::Assigned {
                student_index: index,
                faculty: faculty.name.clone(),
                tier,
            }
        }
        None => StudentOutcome::Unassigned {
            student_index: index,
        },
    }
}

/// Faculty names listed by any student not yet settled.
///
/// Membership is by full-record equality, so identical duplicate rows
/// are treated as the same student.
fn future_preferences<'a>(
    index: usize,
    students: &'a [StudentPreference],
    tracked: &[usize],
) -> HashSet<&'a str> {
    let current = &students[index];
    students
        .iter()
        .filter(|s| *s != current && !tracked.iter().any(|&t| students[t] == **s))
        .flat_map(|s| s.preferences.iter().map(String::as_str))
        .collect()
}
