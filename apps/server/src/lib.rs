//! # mesa-server: HTTP API for Mesa POS
//!
//! The axum application serving the admin panel and the self-service
//! kiosk. Handlers stay thin: extract, validate, call [`mesa_db`], shape
//! the JSON response. Everything stateful lives below this crate.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Lifecycle                                │
//! │                                                                         │
//! │  client ──► CorsLayer ──► TraceLayer ──► router ──► handler            │
//! │                                                        │                │
//! │                            ValidatedJson (serde + validator)           │
//! │                                                        │                │
//! │                                  mesa_db (repositories / checkout /    │
//! │                                           reports)                      │
//! │                                                        │                │
//! │  JSON response ◄── ApiError::into_response ◄───────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use state::AppState;

/// Builds the application: routes, state, and the shared middleware stack.
///
/// The panel and kiosk are served from other origins during development,
/// hence the permissive CORS.
pub fn app(state: AppState) -> Router {
    routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
