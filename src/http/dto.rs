//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Query result types are re-exported from the api module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing types that are already serializable
pub use crate::api::{FlatSession, FreeSlot, Instructor, PeerTutor};
pub use crate::services::rewards::LeaderboardEntry;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Checksum of the loaded timetable document
    pub document_checksum: String,
}

/// Summary of the loaded timetable document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableInfoResponse {
    /// Term labels present in the document
    pub terms: Vec<String>,
    /// Number of cohort sections in the active term
    pub section_count: usize,
    /// Checksum of the loaded document
    pub checksum: String,
}

/// Cohort-section listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionListResponse {
    pub sections: Vec<String>,
    pub total: usize,
}

/// Instructor roster response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorListResponse {
    pub instructors: Vec<Instructor>,
    pub total: usize,
}

/// Peer-tutor roster response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorListResponse {
    pub tutors: Vec<PeerTutor>,
    pub total: usize,
}

/// Flattened session listing for one instructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<FlatSession>,
    pub total: usize,
}

/// Free-slot listing for one cohort section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeSlotListResponse {
    pub slots: Vec<FreeSlot>,
    pub total: usize,
}

/// Leaderboard response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

/// Query parameters for the instructor sessions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionsQuery {
    /// Optional exact course filter
    #[serde(default)]
    pub course: Option<String>,
}

/// Query parameters for the availability endpoint.
///
/// Callers supply either a weekday name (`day=Tuesday`) or a calendar date
/// (`date=2025-10-28`) which is mapped to its weekday.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AvailabilityQuery {
    /// Weekday name, e.g. "Tuesday"
    #[serde(default)]
    pub day: Option<String>,
    /// ISO calendar date, e.g. "2025-10-28"
    #[serde(default)]
    pub date: Option<String>,
    /// Time of day, "H:MM" or hour-only
    pub time: String,
}

/// Availability check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub instructor: String,
    /// Weekday the check ran against
    pub day: String,
    pub time: String,
    pub busy: bool,
}

/// Query parameters for the eligible tutors endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EligibilityQuery {
    /// Student year label, e.g. "Year 3"; absent means no filter
    #[serde(default)]
    pub year: Option<String>,
}
