//! Service layer: stateless query functions over the loaded document.
//!
//! Every function here is a pure read over the immutable [`crate::models::Timetable`]
//! and the rosters; not-found conditions fail soft to an empty answer rather
//! than signaling an error.

pub mod availability;

pub mod eligibility;

pub mod locator;

pub mod rewards;

pub use availability::{is_instructor_busy, section_free_slots, STANDARD_SLOTS};
pub use eligibility::{eligible_peer_tutors, parse_year_label};
pub use locator::{list_instructor_sessions, list_instructors_for_cohort, surname_token};
pub use rewards::{badge_for_points, tutor_leaderboard, BadgeTier, INSTRUCTOR_BADGES};
