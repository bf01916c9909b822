//! HTTP API handlers.
//!
//! Each handler is a thin adapter: it asks the shared [`StatusReporter`]
//! for a document and serializes it as JSON. None of them can fail.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, Json};
use tracing::debug;

use crate::metrics::UptimeExporter;
use crate::status::{GreetingResponse, HealthResponse, InfoResponse, StatusReporter};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The status reporter built at startup.
    pub reporter: Arc<StatusReporter>,
    /// Prometheus registry rendered at `/metrics`.
    pub metrics: UptimeExporter,
    /// Directory of the dashboard bundle served at `/`.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Create app state around a reporter, without a dashboard.
    pub fn new(reporter: StatusReporter) -> Self {
        Self {
            reporter: Arc::new(reporter),
            metrics: UptimeExporter::new(),
            static_dir: None,
        }
    }

    /// Serve the dashboard bundle from `dir`.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

/// Greeting handler.
#[utoipa::path(
    get,
    path = "/api/greeting",
    tag = "status",
    responses(
        (status = 200, description = "Greeting message", body = GreetingResponse)
    )
)]
pub async fn greeting(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(state.reporter.greeting())
}

/// Application info handler.
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "status",
    responses(
        (status = 200, description = "Application information and uptime", body = InfoResponse)
    )
)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(state.reporter.info())
}

/// Health check handler - always returns 200 with status `UP`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = state.reporter.health();
    debug!(uptime = %response.uptime, "health probe");
    Json(response)
}

/// Health check under the API prefix.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn api_health(state: State<AppState>) -> Json<HealthResponse> {
    health(state).await
}

/// Prometheus scrape handler.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render(&state.reporter);
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
