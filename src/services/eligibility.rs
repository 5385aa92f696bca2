//! Eligibility Resolver: seniority filtering of the peer-tutor roster.

use crate::api::PeerTutor;

/// Parse a year label of the form `"Year N"` into `N`.
///
/// Anything else (missing `"Year "` prefix, non-numeric suffix) is `None`.
pub fn parse_year_label(label: &str) -> Option<u32> {
    label.trim().strip_prefix("Year ")?.trim().parse().ok()
}

/// Tutors eligible to tutor a student in `student_year`.
///
/// An empty or blank student year applies no filter and returns the roster
/// unchanged. Otherwise a tutor is eligible when their parsed year is greater
/// than or equal to the student's parsed year; roster order is preserved.
///
/// Malformed year labels fail closed: a tutor with an unparseable year is
/// ineligible, and a non-empty unparseable student year yields no tutors at
/// all, since seniority cannot be established.
pub fn eligible_peer_tutors(student_year: &str, tutors: &[PeerTutor]) -> Vec<PeerTutor> {
    if student_year.trim().is_empty() {
        return tutors.to_vec();
    }

    let Some(student) = parse_year_label(student_year) else {
        return Vec::new();
    };

    tutors
        .iter()
        .filter(|tutor| parse_year_label(&tutor.year).is_some_and(|year| year >= student))
        .cloned()
        .collect()
}
