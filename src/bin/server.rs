//! ScholarX HTTP Server Binary
//!
//! This is the main entry point for the ScholarX timetable REST API server.
//! It loads the reference data, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin scholarx-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SCHOLARX_DATA_DIR`: Directory holding timetable.json, instructors.json
//!   and tutors.json (default: data)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use scholarx_rust::http::{create_router, AppState};
use scholarx_rust::store::DataStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting ScholarX HTTP Server");

    // Load the reference data once; it is immutable for the process lifetime
    let data_dir = env::var("SCHOLARX_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let store = Arc::new(DataStore::load_from_dir(&data_dir)?);
    info!(%data_dir, "Reference data loaded");

    // Create application state
    let state = AppState::new(store);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
