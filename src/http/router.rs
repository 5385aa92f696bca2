//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Timetable document
        .route("/timetable", get(handlers::get_timetable_info))
        .route("/sections", get(handlers::list_sections))
        .route(
            "/sections/{section_id}/instructors",
            get(handlers::get_section_instructors),
        )
        .route(
            "/sections/{section_id}/free-slots",
            get(handlers::get_section_free_slots),
        )
        // Rosters and per-instructor queries
        .route("/instructors", get(handlers::list_instructors))
        .route(
            "/instructors/{name}/sessions",
            get(handlers::get_instructor_sessions),
        )
        .route(
            "/instructors/{name}/availability",
            get(handlers::get_instructor_availability),
        )
        // Peer tutors
        .route("/tutors", get(handlers::list_tutors))
        .route("/tutors/eligible", get(handlers::get_eligible_tutors))
        .route("/tutors/leaderboard", get(handlers::get_tutor_leaderboard));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let store = DataStore::from_json_strs(
            r#"{"Term 1": {"BAPM_2023_Section_A": {}}}"#,
            "[]",
            "[]",
        )
        .expect("minimal store");
        let state = AppState::new(Arc::new(store));
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
