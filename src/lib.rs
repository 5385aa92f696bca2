//! # ScholarX Timetable Backend
//!
//! Query engine for the ScholarX academic timetable.
//!
//! This crate provides the backend for the ScholarX tutoring platform: it loads
//! the institutional timetable document and the instructor/peer-tutor rosters
//! once at startup and answers availability, eligibility and lookup queries
//! over them. The backend exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the timetable document and rosters from JSON
//! - **Session Lookup**: Flatten the nested schedule per instructor or cohort
//! - **Availability**: Busy checks and free-slot discovery for support classes
//! - **Eligibility**: Peer-tutor seniority filtering and badge tiers
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Roster records and flattened query result types
//! - [`models`]: Timetable document, clock-time and weekday primitives
//! - [`services`]: Stateless query functions over the loaded document
//! - [`store`]: The immutable data boundary loaded once at startup
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Query model
//!
//! Every query is a pure, synchronous read over the immutable document; there
//! is no shared mutable state and results are owned by the caller. Not-found
//! conditions yield empty results rather than errors.

pub mod api;

pub mod models;

pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
