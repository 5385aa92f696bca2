//! Session Locator: flatten the nested document per instructor or cohort.

use crate::api::{FlatSession, Instructor};
use crate::models::{CohortSection, Timetable};
use std::collections::HashSet;

/// Extract the surname token from an instructor display name.
///
/// The token is the substring before the first comma, trimmed; a name without
/// a comma yields the whole trimmed string. The timetable document carries no
/// stable instructor identifier, so this token is the join key between roster
/// and document. It is a known limitation: two instructors sharing a surname
/// are indistinguishable at this boundary.
pub fn surname_token(name: &str) -> &str {
    name.split(',').next().unwrap_or(name).trim()
}

/// Every session taught by the given instructor, flattened into uniform
/// records.
///
/// Matching is a deliberate loose substring check: a session belongs to the
/// instructor when its instructor field contains the surname token. This
/// tolerates formatting variance in the document (missing middle initials,
/// honorifics). Results follow document iteration order; callers re-sort for
/// presentation.
pub fn list_instructor_sessions(instructor_name: &str, timetable: &Timetable) -> Vec<FlatSession> {
    let token = surname_token(instructor_name);
    let mut sessions = Vec::new();

    let Some((term_label, term)) = timetable.active_term() else {
        return sessions;
    };

    for (section_id, section_schedule) in term {
        let cohort = CohortSection::parse(section_id);
        for (day, day_schedule) in section_schedule {
            for record in day_schedule.values() {
                if record.instructor.contains(token) {
                    sessions.push(FlatSession {
                        term: term_label.to_string(),
                        cohort_section: section_id.clone(),
                        program: cohort.program.clone(),
                        year: cohort.year.clone(),
                        section: cohort.section.clone(),
                        course: record.course.clone(),
                        day: day.clone(),
                        time: record.time.clone(),
                        classroom: record.classroom.clone(),
                        instructor: record.instructor.clone(),
                    });
                }
            }
        }
    }

    sessions
}

/// Roster instructors teaching the given cohort section.
///
/// Collects the surname token of every instructor appearing in any session of
/// the section (across all days), then keeps each roster instructor whose own
/// surname token is in that set. Deduplicated by roster identity, roster order
/// preserved. An unknown section yields an empty list.
pub fn list_instructors_for_cohort(
    section_id: &str,
    roster: &[Instructor],
    timetable: &Timetable,
) -> Vec<Instructor> {
    let Some(section_schedule) = timetable.section(section_id) else {
        return Vec::new();
    };

    let teaching_tokens: HashSet<&str> = section_schedule
        .values()
        .flat_map(|day_schedule| day_schedule.values())
        .map(|record| surname_token(&record.instructor))
        .collect();

    roster
        .iter()
        .filter(|instructor| teaching_tokens.contains(surname_token(&instructor.name)))
        .cloned()
        .collect()
}
