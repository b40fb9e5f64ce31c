//! HTTP service summarising labelled 2-D points
//!
//! Three endpoints are exposed: a welcome message at `/`, a health check at
//! `/health/` and the point summary at `/analyze/`. The statistics
//! themselves live in `hypermodern-core` and `hypermodern-polars`; this
//! crate only validates requests and shapes responses.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use hypermodern_polars::StatsAnalyzer;
use std::sync::Arc;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;
pub mod validation;

pub use config::ServerConfig;
pub use error::ApiError;

use routes::{analyze::analyze_handler, health::health_handler, root::root_handler};

pub const API_TITLE: &str = "Hypermodern Python API";
pub const API_DESCRIPTION: &str =
    "A sample API showcasing modern Python tools for data science and backend development";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared, read-only request state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub analyzer: StatsAnalyzer,
}

impl AppState {
    pub fn new(analyzer: StatsAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(StatsAnalyzer::with_label_order(config.label_order))
    }
}

/// Build the router with all routes and middleware
pub fn app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/analyze/", post(analyze_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
