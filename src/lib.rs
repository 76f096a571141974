//! Preference-driven supervisor assignment.
//!
//! Assigns a cohort of students to faculty supervisors under per-faculty
//! load caps and open demand, using each student's ranked preferences
//! first and deterministic-except-for-tie-break fallbacks after that.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `StudentPreference`, `FacultyRecord`,
//!   `FacultyTable`, `AssignmentRecord`, `AssignmentLedger`
//! - **`engine`**: The tiered greedy `AssignmentEngine`, its courtesy token
//!   and injectable tie-breakers
//! - **`loader`**: Comma-separated input files and JSON engine config
//! - **`validation`**: Input integrity checks (duplicates, unknown preferences)
//! - **`report`**: Preference-rank statistics and a text chart
//!
//! # Architecture
//!
//! Single-threaded and synchronous. The engine is the only writer of the
//! faculty table; randomness enters only through the `TieBreaker` it is
//! constructed with, so a fixed seed and fixed inputs reproduce a run.
//! The matching is greedy: no backtracking, no stability or optimality
//! guarantee.

pub mod engine;
pub mod loader;
pub mod models;
pub mod report;
pub mod validation;
