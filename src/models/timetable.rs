// ============================================================================
// Timetable Document
// ============================================================================
//
// The nested schedule document the whole query engine reads: term label ->
// cohort section -> weekday -> session key -> session record. It is loaded
// once at startup and never mutated; every query borrows it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scheduled class or office-hours block.
///
/// Field names mirror the upstream timetable export, hence the PascalCase
/// serde renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "Course")]
    pub course: String,
    /// Instructor display string, format `"Lastname, Initial."`. Records for
    /// the same instructor are only guaranteed consistent in the surname
    /// token, not the full string.
    #[serde(rename = "Instructor")]
    pub instructor: String,
    /// Classroom name, or `"N/A"` for non-physical sessions
    #[serde(rename = "Classroom")]
    pub classroom: String,
    /// Session kind, e.g. `"Lecture"` or `"Office Hours"`
    #[serde(rename = "Type")]
    pub session_type: String,
    /// Time range string, `"H:MM-H:MM"`, 24-hour, start < end
    #[serde(rename = "Time")]
    pub time: String,
}

/// Sessions of one weekday, keyed by an arbitrary session key.
pub type DaySchedule = BTreeMap<String, SessionRecord>;

/// Weekday name -> day schedule. Saturday/Sunday are never populated.
pub type SectionSchedule = BTreeMap<String, DaySchedule>;

/// Cohort-section identifier -> section schedule.
pub type TermSchedule = BTreeMap<String, SectionSchedule>;

/// The full timetable document: term label -> term schedule.
///
/// Queries operate on the active term (the only term the document carries in
/// practice). The checksum identifies the exact JSON the document was loaded
/// from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    pub terms: BTreeMap<String, TermSchedule>,
    pub checksum: String,
}

impl Timetable {
    /// The term the engine answers queries for.
    ///
    /// The document carries a single supported term; with several present the
    /// first label in order is used.
    pub fn active_term(&self) -> Option<(&str, &TermSchedule)> {
        self.terms
            .iter()
            .next()
            .map(|(label, term)| (label.as_str(), term))
    }

    /// Cohort-section identifiers of the active term, in document order.
    pub fn section_ids(&self) -> Vec<&str> {
        match self.active_term() {
            Some((_, term)) => term.keys().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Schedule of one cohort section in the active term, if present.
    pub fn section(&self, section_id: &str) -> Option<&SectionSchedule> {
        self.active_term().and_then(|(_, term)| term.get(section_id))
    }
}

/// Derived identity of a cohort section, split out of its identifier.
///
/// `"BAPM_2023_Section_A"` -> program `"BAPM"`, year `"2023"`, section
/// `"Section_A"`. Identifiers with fewer than three tokens keep what they
/// have and leave the rest empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortSection {
    pub program: String,
    pub year: String,
    pub section: String,
}

impl CohortSection {
    pub fn parse(section_id: &str) -> Self {
        let mut tokens = section_id.splitn(3, '_');
        Self {
            program: tokens.next().unwrap_or_default().to_string(),
            year: tokens.next().unwrap_or_default().to_string(),
            section: tokens.next().unwrap_or_default().to_string(),
        }
    }
}

fn validate_input_timetable(timetable_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(timetable_json).context("Invalid timetable JSON")?;
    let has_terms = value.as_object().map(|obj| !obj.is_empty()).unwrap_or(false);
    if !has_terms {
        anyhow::bail!("Timetable document has no term entries");
    }
    Ok(())
}

/// Parse the timetable document from a JSON string.
///
/// The top-level object maps term labels to term schedules; the nested shape
/// is deserialized with Serde and a SHA-256 checksum of the raw JSON is
/// recorded so callers can identify which document build they are serving.
pub fn parse_timetable_json_str(timetable_json: &str) -> Result<Timetable> {
    validate_input_timetable(timetable_json)?;

    let terms: BTreeMap<String, TermSchedule> = serde_json::from_str(timetable_json)
        .context("Failed to deserialize timetable JSON using Serde")?;

    Ok(Timetable {
        terms,
        checksum: compute_timetable_checksum(timetable_json),
    })
}

/// Compute a checksum for the timetable JSON
fn compute_timetable_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

// ============================================================================
// Tests
// ============================================================================
