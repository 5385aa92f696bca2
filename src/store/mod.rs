//! The immutable data boundary.
//!
//! The timetable document and the instructor/peer-tutor rosters are loaded
//! once at startup into a [`DataStore`] and shared read-only across the
//! application (behind an `Arc` in the HTTP layer). Query functions take the
//! document as an explicit parameter; nothing reads ambient state.

use crate::api::{Instructor, PeerTutor};
use crate::models::{parse_timetable_json_str, Timetable};
use std::path::{Path, PathBuf};
use tracing::info;

/// File names expected inside the data directory.
const TIMETABLE_FILE: &str = "timetable.json";
const INSTRUCTORS_FILE: &str = "instructors.json";
const TUTORS_FILE: &str = "tutors.json";

/// Error type for data-store loading.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid timetable document: {0}")]
    Timetable(#[source] anyhow::Error),

    #[error("Invalid {what} roster: {source}")]
    Roster {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for data-store loading.
pub type StoreResult<T> = Result<T, StoreError>;

/// All reference data the query engine operates on.
///
/// Immutable after construction; queries only ever borrow from it.
#[derive(Debug, Clone)]
pub struct DataStore {
    pub timetable: Timetable,
    pub instructors: Vec<Instructor>,
    pub tutors: Vec<PeerTutor>,
}

impl DataStore {
    /// Build a store from already-read JSON strings.
    pub fn from_json_strs(
        timetable_json: &str,
        instructors_json: &str,
        tutors_json: &str,
    ) -> StoreResult<Self> {
        let timetable = parse_timetable_json_str(timetable_json).map_err(StoreError::Timetable)?;
        let instructors: Vec<Instructor> =
            serde_json::from_str(instructors_json).map_err(|source| StoreError::Roster {
                what: "instructor",
                source,
            })?;
        let tutors: Vec<PeerTutor> =
            serde_json::from_str(tutors_json).map_err(|source| StoreError::Roster {
                what: "tutor",
                source,
            })?;

        info!(
            sections = timetable.section_ids().len(),
            instructors = instructors.len(),
            tutors = tutors.len(),
            checksum = %timetable.checksum,
            "Data store loaded"
        );

        Ok(Self {
            timetable,
            instructors,
            tutors,
        })
    }

    /// Load the store from `timetable.json`, `instructors.json` and
    /// `tutors.json` inside `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref();
        let read = |file: &str| -> StoreResult<String> {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|source| StoreError::Io { path, source })
        };

        let timetable_json = read(TIMETABLE_FILE)?;
        let instructors_json = read(INSTRUCTORS_FILE)?;
        let tutors_json = read(TUTORS_FILE)?;

        Self::from_json_strs(&timetable_json, &instructors_json, &tutors_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn test_load_repository_fixtures() {
        let store = DataStore::load_from_dir(repo_data_dir()).expect("fixtures should load");

        assert!(!store.timetable.section_ids().is_empty());
        assert_eq!(store.instructors.len(), 4);
        assert_eq!(store.tutors.len(), 5);

        let (label, _) = store.timetable.active_term().expect("active term");
        assert!(label.contains("2025/2026"));
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let err = DataStore::load_from_dir("/nonexistent/scholarx-data").unwrap_err();
        match err {
            StoreError::Io { path, .. } => {
                assert!(path.ends_with(TIMETABLE_FILE));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_roster_rejected() {
        let timetable = r#"{"Term 1": {"BAPM_2023_Section_A": {}}}"#;
        let err = DataStore::from_json_strs(timetable, "[{\"id\": 1}]", "[]").unwrap_err();
        assert!(matches!(err, StoreError::Roster { what: "instructor", .. }));
    }

    #[test]
    fn test_empty_rosters_allowed() {
        let timetable = r#"{"Term 1": {"BAPM_2023_Section_A": {}}}"#;
        let store = DataStore::from_json_strs(timetable, "[]", "[]").unwrap();
        assert!(store.instructors.is_empty());
        assert!(store.tutors.is_empty());
    }
}
