//! Busy/Free Resolver: slot availability for instructors and cohort sections.
//!
//! Two distinct notions of "busy" live here on purpose. The instructor busy
//! check compares at hour granularity (minutes discarded on both sides),
//! while the section free-slot scan compares occupied time-range strings
//! literally against the standard slot catalog. They are inconsistent with
//! each other; the product has not decided which one wins, so both are kept
//! as-is and pinned by tests.

use crate::api::FreeSlot;
use crate::models::{ClockTime, TimeRange, Timetable, TEACHING_DAYS};
use crate::services::locator::list_instructor_sessions;

/// The four standard two-hour slots bookable for support classes, per weekday.
pub const STANDARD_SLOTS: [&str; 4] = ["08:00-10:00", "10:30-12:30", "14:00-16:00", "16:15-18:15"];

/// Whether the instructor has a session overlapping `time` on `day`.
///
/// Overlap is checked at hour granularity: the query time and each session
/// range are truncated to whole hours and the query hour must fall in
/// `[start, end)`. A query at `10:45` therefore matches a session spanning
/// `10:30-12:30`.
///
/// There are no error conditions: an unknown instructor or day yields `false`
/// (vacuously free), and so does an unparseable query time or session range —
/// the check fails soft rather than blocking a booking on malformed data.
pub fn is_instructor_busy(
    instructor_name: &str,
    day: &str,
    time: &str,
    timetable: &Timetable,
) -> bool {
    let Ok(query_time) = time.parse::<ClockTime>() else {
        return false;
    };

    list_instructor_sessions(instructor_name, timetable)
        .iter()
        .filter(|session| session.day == day)
        .filter_map(|session| session.time.parse::<TimeRange>().ok())
        .any(|range| range.contains_hour(query_time.hour))
}

/// Free standard slots for a cohort section, Monday through Friday.
///
/// A standard slot counts as free only when its literal string does not
/// exactly match any occupied time-range string of that day. This is not an
/// interval-overlap check: a session at `09:00-11:00` does NOT mark
/// `08:00-10:00` busy. Only exact standard slots ever block a candidate.
/// An unknown section has no sessions, so all twenty candidates come back.
///
/// Results are ordered weekday first (Monday to Friday), then by slot order
/// within the day.
pub fn section_free_slots(section_id: &str, timetable: &Timetable) -> Vec<FreeSlot> {
    let section_schedule = timetable.section(section_id);
    let mut free_slots = Vec::new();

    for day in TEACHING_DAYS {
        let occupied: Vec<&str> = section_schedule
            .and_then(|schedule| schedule.get(day.as_str()))
            .map(|day_schedule| {
                day_schedule
                    .values()
                    .map(|record| record.time.as_str())
                    .collect()
            })
            .unwrap_or_default();

        for slot in STANDARD_SLOTS {
            if !occupied.contains(&slot) {
                free_slots.push(FreeSlot {
                    day: day.as_str().to_string(),
                    time: slot.to_string(),
                });
            }
        }
    }

    free_slots
}
