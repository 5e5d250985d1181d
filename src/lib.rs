//! Hoopcast — NBA rookie career-longevity prediction API
//!
//! A single POST `/` endpoint backed by two read-only components loaded
//! at startup:
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                    HOOPCAST API                    │
//! ├────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐  ┌────────────┐  │
//! │  │  POST /   │──▶│  Reference   │  │ Classifier │  │
//! │  │  (Axum)   │   │  Table (CSV) │  │ (logreg)   │  │
//! │  └───────────┘   └──────────────┘  └────────────┘  │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! A request carrying a non-empty `name` is a lookup against the
//! reference table; anything else is a prediction over the supplied
//! stat line. Neither component is ever mutated after startup, so
//! handlers run concurrently with no locking.

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
///
/// Both members are immutable after startup; cloning the state only
/// bumps the `Arc` counts.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<dataset::ReferenceTable>,
    pub classifier: Arc<classifier::Classifier>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::predict::query))
        .route("/health", get(handlers::health::check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
