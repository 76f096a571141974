//! Assignment domain models.
//!
//! Provides the data types the assignment engine consumes and produces.
//!
//! | Type | Role | Mutability |
//! |------|------|------------|
//! | `StudentPreference` | Preference ledger row | Immutable after load |
//! | `FacultyRecord` / `FacultyTable` | Capacity table | Mutated by the engine |
//! | `AssignmentRecord` / `AssignmentLedger` | Engine output | Append-only |

mod faculty;
mod ledger;
mod student;

pub use faculty::{FacultyRecord, FacultyTable};
pub use ledger::{AssignmentLedger, AssignmentRecord};
pub use student::{StudentPreference, MAX_PREFERENCES};
