//! Data-driven functional tests for the query engine, run against the real
//! timetable export in `data/`.

mod support;

use scholarx_rust::services::{
    eligible_peer_tutors, is_instructor_busy, list_instructor_sessions,
    list_instructors_for_cohort, section_free_slots, surname_token, STANDARD_SLOTS,
};
use support::load_fixture_store;

#[test]
fn every_located_session_contains_the_surname_token() {
    let store = load_fixture_store();

    for instructor in &store.instructors {
        let token = surname_token(&instructor.name);
        for session in list_instructor_sessions(&instructor.name, &store.timetable) {
            assert!(
                session.instructor.contains(token),
                "session {:?} does not contain token {:?}",
                session.instructor,
                token
            );
        }
    }
}

#[test]
fn dieudonne_teaches_across_three_days() {
    let store = load_fixture_store();
    let sessions = list_instructor_sessions("Dieudonne, U.", &store.timetable);

    assert_eq!(sessions.len(), 3);
    let mut days: Vec<&str> = sessions.iter().map(|s| s.day.as_str()).collect();
    days.sort_unstable();
    assert_eq!(days, vec!["Friday", "Thursday", "Tuesday"]);
    for session in &sessions {
        assert_eq!(session.cohort_section, "BAPM_2023_Section_A");
        assert_eq!(session.program, "BAPM");
        assert_eq!(session.year, "2023");
        assert_eq!(session.section, "Section_A");
    }
}

#[test]
fn cohort_instructors_are_sound_and_complete() {
    let store = load_fixture_store();
    let teaching =
        list_instructors_for_cohort("BAPM_2023_Section_A", &store.instructors, &store.timetable);

    let names: Vec<&str> = teaching.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Dieudonne, U.", "Jean Claude, S.", "Dr. Sam, B."]);

    // Genevieve teaches nowhere in this section
    assert!(!names.contains(&"Genevieve, U."));
}

#[test]
fn busy_check_hour_granularity_on_real_data() {
    let store = load_fixture_store();

    // Tuesday 9:00-10:00 lecture: 9:30 busy, 10:30 free
    assert!(is_instructor_busy(
        "Dieudonne, U.",
        "Tuesday",
        "9:30",
        &store.timetable
    ));
    assert!(!is_instructor_busy(
        "Dieudonne, U.",
        "Tuesday",
        "10:30",
        &store.timetable
    ));
}

#[test]
fn busy_check_unknown_day_is_vacuously_free() {
    let store = load_fixture_store();
    assert!(!is_instructor_busy(
        "Dieudonne, U.",
        "Sunday",
        "9:30",
        &store.timetable
    ));
}

#[test]
fn monday_without_sessions_offers_all_standard_slots() {
    let store = load_fixture_store();
    let slots = section_free_slots("BAPM_2023_Section_A", &store.timetable);

    let monday: Vec<&str> = slots
        .iter()
        .filter(|s| s.day == "Monday")
        .map(|s| s.time.as_str())
        .collect();
    assert_eq!(monday, STANDARD_SLOTS.to_vec());
}

#[test]
fn tuesday_occupied_slots_are_withheld() {
    let store = load_fixture_store();
    let slots = section_free_slots("BAPM_2023_Section_A", &store.timetable);

    // Tuesday carries 10:30-12:30 and 14:00-16:00 exactly; 9:00-10:00 and
    // 16:15-17:15 do not literally match any standard slot.
    let tuesday: Vec<&str> = slots
        .iter()
        .filter(|s| s.day == "Tuesday")
        .map(|s| s.time.as_str())
        .collect();
    assert_eq!(tuesday, vec!["08:00-10:00", "16:15-18:15"]);
}

#[test]
fn eligibility_filters_by_seniority() {
    let store = load_fixture_store();

    // Roster holds Years 2-4; a Year 3 student keeps Years 3 and 4
    let eligible = eligible_peer_tutors("Year 3", &store.tutors);
    let names: Vec<&str> = eligible.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Chen", "Emily Davis", "Jessica Wong"]);

    // Year 1 student gets the whole roster
    assert_eq!(
        eligible_peer_tutors("Year 1", &store.tutors).len(),
        store.tutors.len()
    );

    // Empty year is the identity
    assert_eq!(
        eligible_peer_tutors("", &store.tutors).len(),
        store.tutors.len()
    );
}
