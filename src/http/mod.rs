//! Axum-based HTTP server for the timetable query API.
//!
//! This module provides the REST surface consumed by the ScholarX frontend:
//! routing, request handlers, application state and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
