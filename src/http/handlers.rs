//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for the actual query logic. All queries are cheap in-memory reads,
//! so handlers run them inline.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::str::FromStr;

use super::dto::{
    AvailabilityQuery, AvailabilityResponse, EligibilityQuery, FreeSlotListResponse,
    HealthResponse, InstructorListResponse, LeaderboardResponse, SectionListResponse,
    SessionListResponse, SessionsQuery, TimetableInfoResponse, TutorListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{TimeRange, Weekday};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the loaded document's checksum.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        document_checksum: state.store.timetable.checksum.clone(),
    }))
}

// =============================================================================
// Timetable Document
// =============================================================================

/// GET /v1/timetable
///
/// Summary of the loaded timetable document.
pub async fn get_timetable_info(
    State(state): State<AppState>,
) -> HandlerResult<TimetableInfoResponse> {
    let timetable = &state.store.timetable;
    Ok(Json(TimetableInfoResponse {
        terms: timetable.terms.keys().cloned().collect(),
        section_count: timetable.section_ids().len(),
        checksum: timetable.checksum.clone(),
    }))
}

/// GET /v1/sections
///
/// List the cohort-section identifiers of the active term.
pub async fn list_sections(State(state): State<AppState>) -> HandlerResult<SectionListResponse> {
    let sections: Vec<String> = state
        .store
        .timetable
        .section_ids()
        .into_iter()
        .map(str::to_string)
        .collect();
    let total = sections.len();

    Ok(Json(SectionListResponse { sections, total }))
}

// =============================================================================
// Rosters
// =============================================================================

/// GET /v1/instructors
///
/// Full instructor roster.
pub async fn list_instructors(
    State(state): State<AppState>,
) -> HandlerResult<InstructorListResponse> {
    let instructors = state.store.instructors.clone();
    let total = instructors.len();
    Ok(Json(InstructorListResponse { instructors, total }))
}

/// GET /v1/tutors
///
/// Full peer-tutor roster.
pub async fn list_tutors(State(state): State<AppState>) -> HandlerResult<TutorListResponse> {
    let tutors = state.store.tutors.clone();
    let total = tutors.len();
    Ok(Json(TutorListResponse { tutors, total }))
}

// =============================================================================
// Session Locator
// =============================================================================

/// GET /v1/instructors/{name}/sessions
///
/// Flattened sessions taught by the instructor, optionally filtered to one
/// course, sorted by weekday then start hour for presentation. An unknown
/// instructor yields an empty list.
pub async fn get_instructor_sessions(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SessionsQuery>,
) -> HandlerResult<SessionListResponse> {
    let mut sessions = services::list_instructor_sessions(&name, &state.store.timetable);

    if let Some(course) = &query.course {
        sessions.retain(|session| &session.course == course);
    }

    // Engine output follows document order; present in calendar order instead.
    sessions.sort_by_key(|session| {
        let day_index = Weekday::from_str(&session.day)
            .map(|day| day.index())
            .unwrap_or(u8::MAX);
        let start_hour = TimeRange::from_str(&session.time)
            .map(|range| range.start.hour)
            .unwrap_or(u8::MAX);
        (day_index, start_hour, session.time.clone())
    });

    let total = sessions.len();
    Ok(Json(SessionListResponse { sessions, total }))
}

/// GET /v1/sections/{section_id}/instructors
///
/// Roster instructors teaching the cohort section.
pub async fn get_section_instructors(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
) -> HandlerResult<InstructorListResponse> {
    let instructors = services::list_instructors_for_cohort(
        &section_id,
        &state.store.instructors,
        &state.store.timetable,
    );
    let total = instructors.len();
    Ok(Json(InstructorListResponse { instructors, total }))
}

// =============================================================================
// Busy/Free Resolver
// =============================================================================

/// GET /v1/instructors/{name}/availability
///
/// Whether the instructor is busy at the given day (or date) and time.
pub async fn get_instructor_availability(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> HandlerResult<AvailabilityResponse> {
    let day = resolve_query_day(&query)?;

    let busy = services::is_instructor_busy(&name, &day, &query.time, &state.store.timetable);

    Ok(Json(AvailabilityResponse {
        instructor: name,
        day,
        time: query.time,
        busy,
    }))
}

/// Map the availability query to a weekday name: an explicit `day` wins, a
/// `date` is resolved through the calendar, anything else is a bad request.
fn resolve_query_day(query: &AvailabilityQuery) -> Result<String, AppError> {
    if let Some(day) = &query.day {
        return Ok(day.clone());
    }
    if let Some(date) = &query.date {
        let parsed = chrono::NaiveDate::from_str(date)
            .map_err(|e| AppError::BadRequest(format!("Invalid date '{}': {}", date, e)))?;
        let weekday: Weekday = chrono::Datelike::weekday(&parsed).into();
        return Ok(weekday.as_str().to_string());
    }
    Err(AppError::BadRequest(
        "Either 'day' or 'date' must be provided".to_string(),
    ))
}

/// GET /v1/sections/{section_id}/free-slots
///
/// Free standard slots for the cohort section, Monday through Friday.
pub async fn get_section_free_slots(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
) -> HandlerResult<FreeSlotListResponse> {
    let slots = services::section_free_slots(&section_id, &state.store.timetable);
    let total = slots.len();
    Ok(Json(FreeSlotListResponse { slots, total }))
}

// =============================================================================
// Eligibility & Rewards
// =============================================================================

/// GET /v1/tutors/eligible
///
/// Peer tutors eligible for the given student year; no year means the full
/// roster.
pub async fn get_eligible_tutors(
    State(state): State<AppState>,
    Query(query): Query<EligibilityQuery>,
) -> HandlerResult<TutorListResponse> {
    let year = query.year.unwrap_or_default();
    let tutors = services::eligible_peer_tutors(&year, &state.store.tutors);
    let total = tutors.len();
    Ok(Json(TutorListResponse { tutors, total }))
}

/// GET /v1/tutors/leaderboard
///
/// Tutors ordered by points with their badge tiers.
pub async fn get_tutor_leaderboard(
    State(state): State<AppState>,
) -> HandlerResult<LeaderboardResponse> {
    Ok(Json(LeaderboardResponse {
        entries: services::tutor_leaderboard(&state.store.tutors),
    }))
}
