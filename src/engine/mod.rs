//! Assignment engine.
//!
//! Assigns students to faculty one at a time, in ledger order, trying
//! each tier until one succeeds:
//!
//! | Tier | Rule | Requested load |
//! |------|------|----------------|
//! | 0 | First preference with `load < 3`, or one courtesy match with `load < 4` | must be > 0 |
//! | 1 | Least-loaded faculty with `load < 4`, random among ties | must be > 0 |
//! | 2a | Minimum-load faculty the student prefers | ignored |
//! | 2b | Minimum-load faculty no remaining student wants, else any minimum-load faculty | ignored |
//!
//! Tier 2 sorts the faculty table by load, and that order persists for
//! every later student. The matching is greedy with no backtracking.
//!
//! # Usage
//!
//! ```
//! use u_assign::engine::{AssignmentEngine, RandomTieBreaker};
//! use u_assign::models::{FacultyRecord, FacultyTable, StudentPreference};
//!
//! let students = vec![StudentPreference::new("S1", "1").with_preferences(["A", "B"])];
//! let mut table = FacultyTable::new(vec![
//!     FacultyRecord::new("A", 0, 1),
//!     FacultyRecord::new("B", 0, 1),
//! ]);
//!
//! let mut engine = AssignmentEngine::new(RandomTieBreaker::seeded(42));
//! let run = engine.assign(&students, &mut table);
//! assert_eq!(run.ledger.records()[0].faculty_name, "A");
//! ```

mod assign;
mod config;
mod courtesy;
mod tie_break;

pub use assign::{AssignmentEngine, AssignmentRun};
pub use config::EngineConfig;
pub use courtesy::CourtesyToken;
pub use tie_break::{FirstCandidate, RandomTieBreaker, TieBreaker};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule that produced an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// Tier 0: preferred faculty under the preferred load cap.
    Preferred,
    /// Tier 0: preferred faculty admitted by the one-shot courtesy relaxation.
    Courtesy,
    /// Tier 1: least-loaded faculty with open demand.
    LeastLoaded,
    /// Tier 2a: minimum-load faculty the student prefers.
    ForcedPreferred,
    /// Tier 2b: minimum-load faculty not wanted by any remaining student.
    ForcedReserved,
    /// Tier 2b: every minimum-load faculty was wanted; any one of them.
    ForcedAny,
}

impl MatchTier {
    /// Whether the student got a faculty from their preference list by rule.
    pub fn honors_preference(self) -> bool {
        matches!(self, Self::Preferred | Self::Courtesy | Self::ForcedPreferred)
    }

    /// Whether this is a Tier 2 forced placement.
    pub fn is_forced(self) -> bool {
        matches!(self, Self::ForcedPreferred | Self::ForcedReserved | Self::ForcedAny)
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Preferred => "preferred",
            Self::Courtesy => "courtesy",
            Self::LeastLoaded => "least-loaded",
            Self::ForcedPreferred => "forced-preferred",
            Self::ForcedReserved => "forced-reserved",
            Self::ForcedAny => "forced-any",
        };
        f.write_str(s)
    }
}

/// Per-student result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentOutcome {
    /// The student was assigned.
    Assigned {
        /// Position in the input preference ledger.
        student_index: usize,
        /// Faculty the student was assigned to.
        faculty: String,
        /// Rule that produced the assignment.
        tier: MatchTier,
    },
    /// No tier could place the student.
    Unassigned {
        /// Position in the input preference ledger.
        student_index: usize,
    },
}

impl StudentOutcome {
    /// Position of the student in the input ledger.
    pub fn student_index(&self) -> usize {
        match self {
            Self::Assigned { student_index, .. } | Self::Unassigned { student_index } => {
                *student_index
            }
        }
    }

    /// Assigned faculty name, if any.
    pub fn faculty(&self) -> Option<&str> {
        match self {
            Self::Assigned { faculty, .. } => Some(faculty),
            Self::Unassigned { .. } => None,
        }
    }

    /// Matching tier, if assigned.
    pub fn tier(&self) -> Option<MatchTier> {
        match self {
            Self::Assigned { tier, .. } => Some(*tier),
            Self::Unassigned { .. } => None,
        }
    }

    /// Whether the student was assigned.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned { .. })
    }
}
