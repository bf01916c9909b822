//! Hello World status service.
//!
//! A small HTTP service reporting a greeting, an application summary and a
//! health probe, each carrying the process uptime.
//!
//! ```text
//! GET /api/greeting  -> message, status, version, timestamp
//! GET /api/info      -> application, version, author, description,
//!                       mission?, startTime, uptime, endpoints
//! GET /health        -> status "UP", application, version, uptime
//! GET /api/health    -> same as /health
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`status`]: Uptime accounting and the status queries
//! - [`api`]: HTTP routes, handlers and OpenAPI document
//! - [`metrics`]: Prometheus uptime gauges
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod status;
pub mod utils;

pub use config::Config;
pub use error::{ServiceError, Result};
pub use status::StatusReporter;
