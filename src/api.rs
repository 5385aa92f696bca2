//! Public API surface for the timetable backend.
//!
//! This file consolidates the roster records and query result types.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

pub use crate::models::{ClockTime, TimeRange, Weekday};

/// Instructor identifier (roster key, e.g. `"i1"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstructorId(pub String);

/// Peer-tutor identifier (roster key, e.g. `"t1"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TutorId(pub String);

impl InstructorId {
    pub fn new(value: impl Into<String>) -> Self {
        InstructorId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TutorId {
    pub fn new(value: impl Into<String>) -> Self {
        TutorId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstructorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TutorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instructor roster record.
///
/// The display name follows the `"Lastname, Initial."` convention used by the
/// timetable document; joins against the document go through the surname token
/// (see [`crate::services::locator::surname_token`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    /// Display name, format `"Lastname, Initial."`
    pub name: String,
    pub title: String,
    pub department: String,
    pub specialty: String,
    /// Year labels this instructor teaches, e.g. `["Year 1", "Year 3"]`
    pub teaching_years: Vec<String>,
    pub email: String,
    /// Mentorship points accumulated from completed sessions
    #[serde(default)]
    pub points: u32,
}

/// Peer-tutor roster record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerTutor {
    pub id: TutorId,
    pub name: String,
    pub program: String,
    /// Year label of the form `"Year N"`
    pub year: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub expertise: Vec<String>,
}

/// One session flattened out of the nested timetable document.
///
/// Program, admission year and section label are derived from the
/// cohort-section identifier (`"BAPM_2023_Section_A"` splits into `"BAPM"`,
/// `"2023"`, `"Section_A"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSession {
    /// Term label the session belongs to
    pub term: String,
    /// Full cohort-section identifier
    pub cohort_section: String,
    /// Program code (first `_` token of the cohort-section id)
    pub program: String,
    /// Admission-year code (second `_` token)
    pub year: String,
    /// Section label (remaining tokens)
    pub section: String,
    pub course: String,
    /// Weekday name as it appears in the document
    pub day: String,
    /// Raw time-range string, `"H:MM-H:MM"`
    pub time: String,
    /// Classroom, or `"N/A"` for non-physical sessions
    pub classroom: String,
    /// Instructor display string as recorded in the document
    pub instructor: String,
}

/// A candidate free slot for a cohort section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    /// Weekday name
    pub day: String,
    /// Standard slot string, e.g. `"08:00-10:00"`
    pub time: String,
}
