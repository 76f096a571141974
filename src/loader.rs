//! Input loading.
//!
//! Reads the preference ledger and faculty table from comma-separated
//! text files with a header row, and the engine configuration from JSON.
//!
//! # Student rows
//!
//! | Column | Field |
//! |--------|-------|
//! | 0 | timestamp (ignored) |
//! | 1 | name |
//! | 2 | id |
//! | 3..=5 | GPA columns (master, current, average) |
//! | 6..=19 | preferences 1..=14 |
//!
//! # Faculty rows
//!
//! `name, current_load, requested_load`
//!
//! `parse_*` functions report problems as [`LoadError`]. `load_*` functions
//! treat any problem as an unavailable source: they log a warning and
//! return an empty ledger.

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::EngineConfig;
use crate::models::{FacultyRecord, FacultyTable, StudentPreference, MAX_PREFERENCES};

const STUDENT_NAME_COL: usize = 1;
const STUDENT_ID_COL: usize = 2;
const GPA_COLS: std::ops::Range<usize> = 3..6;
const FIRST_PREFERENCE_COL: usize = 6;
const STUDENT_COLUMNS: usize = FIRST_PREFERENCE_COL + MAX_PREFERENCES;
const FACULTY_COLUMNS: usize = 3;

/// Errors raised while reading inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected {expected} columns, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid load value '{value}'")]
    InvalidLoad { line: usize, value: String },

    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Parses student preference text.
///
/// The first line is a header and is skipped.
pub fn parse_student_preferences(text: &str) -> Result<Vec<StudentPreference>, LoadError> {
    data_rows(text)
        .map(|(line, fields)| {
            if fields.len() < STUDENT_COLUMNS {
                return Err(LoadError::ShortRow {
                    line,
                    expected: STUDENT_COLUMNS,
                    found: fields.len(),
                });
            }
            Ok(StudentPreference::new(fields[STUDENT_NAME_COL], fields[STUDENT_ID_COL])
                .with_gpa_fields(fields[GPA_COLS].iter().copied())
                .with_preferences(
                    fields[FIRST_PREFERENCE_COL..STUDENT_COLUMNS].iter().copied(),
                ))
        })
        .collect()
}

/// Parses faculty capacity text.
///
/// The first line is a header and is skipped.
pub fn parse_faculty_table(text: &str) -> Result<FacultyTable, LoadError> {
    let records = data_rows(text)
        .map(|(line, fields)| {
            if fields.len() < FACULTY_COLUMNS {
                return Err(LoadError::ShortRow {
                    line,
                    expected: FACULTY_COLUMNS,
                    found: fields.len(),
                });
            }
            Ok(FacultyRecord::new(
                fields[0],
                parse_load(line, fields[1])?,
                parse_load(line, fields[2])?,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FacultyTable::new(records))
}

/// Reads and parses a student preference file.
pub fn read_student_preferences(
    path: impl AsRef<Path>,
) -> Result<Vec<StudentPreference>, LoadError> {
    parse_student_preferences(&read_text(path.as_ref())?)
}

/// Reads and parses a faculty capacity file.
pub fn read_faculty_table(path: impl AsRef<Path>) -> Result<FacultyTable, LoadError> {
    parse_faculty_table(&read_text(path.as_ref())?)
}

/// Loads student preferences, or an empty ledger if the file is missing or corrupt.
pub fn load_student_preferences(path: impl AsRef<Path>) -> Vec<StudentPreference> {
    let path = path.as_ref();
    read_student_preferences(path).unwrap_or_else(|e| {
        warn!("student preferences {} unavailable: {e}", path.display());
        Vec::new()
    })
}

/// Loads the faculty table, or an empty table if the file is missing or corrupt.
pub fn load_faculty_table(path: impl AsRef<Path>) -> FacultyTable {
    let path = path.as_ref();
    read_faculty_table(path).unwrap_or_else(|e| {
        warn!("faculty table {} unavailable: {e}", path.display());
        FacultyTable::default()
    })
}

/// Reads an engine configuration from a JSON file.
///
/// Missing fields take their defaults.
pub fn read_engine_config(path: impl AsRef<Path>) -> Result<EngineConfig, LoadError> {
    let text = read_text(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-header rows as (1-based line number, trimmed fields).
fn data_rows<'a>(text: &'a str) -> impl Iterator<Item = (usize, Vec<&'a str>)> + 'a {
    text.trim()
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line.split(',').map(str::trim).collect()))
}

fn parse_load(line: usize, value: &str) -> Result<i32, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidLoad {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUDENTS: &str = "\
Timestamp,Name,ID,Master GPA,Current GPA,Average GPA,P1,P2,P3,P4,P5,P6,P7,P8,P9,P10,P11,P12,P13,P14
2024-01-01 10:00, Alice ,1001,3.5,3.7,3.6,Dr. A,Dr. B,,,,,,,,,,,,
2024-01-01 10:05,Bob,1002,3.1,3.2,3.15,Dr. B,Dr. C,Dr. A,,,,,,,,,,,,extra
";

    const FACULTY: &str = "\
Name,Current Load,Requested Load
Dr. A, 0, 2
Dr. B,3,1
Dr. C,1,-1
";

    #[test]
    fn test_parse_students() {
        let students = parse_student_preferences(STUDENTS).unwrap();
        assert_eq!(students.len(), 2);

        let alice = &students[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.id, "1001");
        assert_eq!(alice.gpa_fields, vec!["3.5", "3.7", "3.6"]);
        assert_eq!(alice.preferences.len(), MAX_PREFERENCES);
        assert_eq!(alice.preferences[0], "Dr. A");
        assert_eq!(alice.preferences[2], "");

        let bob = &students[1];
        assert_eq!(bob.rank_of("Dr. A"), Some(3));
        assert_eq!(bob.rank_of("extra"), None);
    }

    #[test]
    fn test_parse_faculty() {
        let table = parse_faculty_table(FACULTY).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[0], FacultyRecord::new("Dr. A", 0, 2));
        assert_eq!(table.get("Dr. C").unwrap().requested_load, -1);
    }

    #[test]
    fn test_header_only_and_blank_lines() {
        assert!(parse_faculty_table("Name,Current,Requested\n").unwrap().is_empty());
        assert!(parse_student_preferences("").unwrap().is_empty());
        let table = parse_faculty_table("h\n\nX,1,1\n\n").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_short_student_row() {
        let err = parse_student_preferences("header\nts,Name,1,3.0\n").unwrap_err();
        match err {
            LoadError::ShortRow { line, expected, found } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 20);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extreme_loads_parse() {
        let table = parse_faculty_table("h\nA,4,-2147483648\n").unwrap();
        assert_eq!(table.records()[0], FacultyRecord::new("A", 4, i32::MIN));
        assert!(matches!(
            parse_faculty_table("h\nA,4,-2147483649\n"),
            Err(LoadError::InvalidLoad { line: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_load() {
        let err = parse_faculty_table("header\nDr. A,two,1\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidLoad { line: 2, .. }));
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let path = std::env::temp_dir().join("u_assign_definitely_missing_input.csv");
        assert!(matches!(
            read_faculty_table(&path),
            Err(LoadError::Io { .. })
        ));
        assert!(load_faculty_table(&path).is_empty());
        assert!(load_student_preferences(&path).is_empty());
    }

    #[test]
    fn test_corrupt_file_yields_empty() {
        let path = std::env::temp_dir().join(format!(
            "u_assign_corrupt_faculty_{}.csv",
            std::process::id()
        ));
        fs::write(&path, "header\nDr. A,x,y\n").unwrap();
        assert!(load_faculty_table(&path).is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_engine_config() {
        let path = std::env::temp_dir().join(format!(
            "u_assign_config_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"preferred_load_cap": 2}"#).unwrap();
        let config = read_engine_config(&path).unwrap();
        assert_eq!(config.preferred_load_cap, 2);
        assert_eq!(config.absolute_load_cap, 4);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            read_engine_config(&path),
            Err(LoadError::Config(_))
        ));
        fs::remove_file(&path).unwrap();
    }
}
