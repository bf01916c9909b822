//! The status reporter: fixed metadata plus the process start time.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, warn};

use super::types::{EndpointCatalog, GreetingResponse, HealthResponse, InfoResponse, STATUS_UP};
use super::uptime::uptime_between;
use crate::config::Config;
use crate::error::Result;

/// Author credited in the greeting and info documents.
pub const AUTHOR: &str = "Ilan";
/// Display name reported by the info query.
pub const APPLICATION_NAME: &str = "Maven Hello World - DevOps Exercise";
/// Short name reported by the health probe.
pub const SERVICE_NAME: &str = "Maven Hello World";
/// Description reported by the info query.
pub const DESCRIPTION: &str = "Production-ready Rust REST API";
/// Status line reported by the greeting query.
pub const GREETING_STATUS: &str = "Service operational";

/// Static metadata reported alongside uptime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Display name for the info document.
    pub application_name: String,
    /// Short name for the health probe.
    pub service_name: String,
    pub author: String,
    pub version: String,
    pub description: String,
    pub mission: Option<String>,
    pub endpoints: EndpointCatalog,
}

impl Metadata {
    /// Metadata with the built-in names and the given version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            application_name: APPLICATION_NAME.to_string(),
            service_name: SERVICE_NAME.to_string(),
            author: AUTHOR.to_string(),
            version: version.into(),
            description: DESCRIPTION.to_string(),
            mission: None,
            endpoints: default_endpoints(),
        }
    }

    /// Set the mission line.
    pub fn with_mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = Some(mission.into());
        self
    }

    /// Build metadata from the loaded configuration.
    ///
    /// `/` is only listed when the dashboard directory exists, matching
    /// what the router mounts.
    pub fn from_config(config: &Config) -> Self {
        let mut metadata = Self::new(config.app_version.trim());
        if let Some(mission) = config.mission() {
            metadata = metadata.with_mission(mission);
        }
        if config.dashboard_dir().is_none() {
            metadata.endpoints = metadata.endpoints.without("/");
        }
        metadata
    }
}

/// Every route the HTTP layer serves, in display order.
pub fn default_endpoints() -> EndpointCatalog {
    EndpointCatalog::new()
        .with("/", "React Dashboard (UI)")
        .with("/api/greeting", "API greeting endpoint")
        .with("/api/info", "Application information")
        .with("/health", "Health check endpoint")
        .with("/api/health", "Health check endpoint")
        .with("/metrics", "Prometheus metrics")
        .with("/api-docs/ui", "OpenAPI documentation")
}

/// Answers the greeting, info and health queries.
///
/// Built once at startup and shared read-only between request handlers.
/// Nothing is mutated after construction, so concurrent queries need no
/// locking.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    start_time: OffsetDateTime,
    metadata: Metadata,
}

impl StatusReporter {
    /// Create a reporter whose uptime counts from now.
    pub fn new(metadata: Metadata) -> Self {
        Self::started_at(metadata, OffsetDateTime::now_utc())
    }

    /// Create a reporter with an explicit start time.
    pub fn started_at(metadata: Metadata, start_time: OffsetDateTime) -> Self {
        debug!(start = %format_timestamp(start_time), version = %metadata.version, "status reporter created");
        Self {
            start_time,
            metadata,
        }
    }

    pub fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Current uptime as `HH:MM:SS`.
    pub fn uptime(&self) -> String {
        self.uptime_at(OffsetDateTime::now_utc())
    }

    /// Uptime as of `now`.
    pub fn uptime_at(&self, now: OffsetDateTime) -> String {
        uptime_between(self.start_time, now)
    }

    /// Greeting document stamped with the current time.
    pub fn greeting(&self) -> GreetingResponse {
        self.greeting_at(OffsetDateTime::now_utc())
    }

    pub fn greeting_at(&self, now: OffsetDateTime) -> GreetingResponse {
        GreetingResponse {
            message: format!("Hello World from {}!", self.metadata.author),
            status: GREETING_STATUS.to_string(),
            version: self.metadata.version.clone(),
            timestamp: format_timestamp(now),
        }
    }

    /// Application summary with the current uptime.
    pub fn info(&self) -> InfoResponse {
        self.info_at(OffsetDateTime::now_utc())
    }

    pub fn info_at(&self, now: OffsetDateTime) -> InfoResponse {
        InfoResponse {
            application: self.metadata.application_name.clone(),
            version: self.metadata.version.clone(),
            author: self.metadata.author.clone(),
            description: self.metadata.description.clone(),
            mission: self.metadata.mission.clone(),
            start_time: format_timestamp(self.start_time),
            uptime: self.uptime_at(now),
            endpoints: self.metadata.endpoints.clone(),
        }
    }

    /// The info document as pretty-printed JSON.
    pub fn info_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.info())?)
    }

    /// Liveness/readiness document. Always reports `UP`.
    pub fn health(&self) -> HealthResponse {
        self.health_at(OffsetDateTime::now_utc())
    }

    pub fn health_at(&self, now: OffsetDateTime) -> HealthResponse {
        HealthResponse {
            status: STATUS_UP.to_string(),
            application: self.metadata.service_name.clone(),
            version: self.metadata.version.clone(),
            uptime: self.uptime_at(now),
        }
    }
}

/// RFC 3339 timestamp in UTC, e.g. `2024-05-01T12:30:00.123456789Z`.
///
/// Falls back to Unix seconds for dates RFC 3339 cannot express.
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    let utc = ts.to_offset(time::UtcOffset::UTC);
    match utc.format(&Rfc3339) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "timestamp outside RFC 3339 range");
            utc.unix_timestamp().to_string()
        }
    }
}
