//! Unified error types for the status service.
//!
//! The status queries themselves never fail; these errors cover startup
//! (configuration, binding the listener), serving and CLI rendering.

use thiserror::Error;

/// Unified error type for the status service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `APP_VERSION` is empty or whitespace.
    #[error("APP_VERSION must not be empty")]
    EmptyVersion,

    /// `APP_MISSION` was set but contains only whitespace.
    #[error("APP_MISSION must not be blank when set")]
    BlankMission,

    /// Port 0 would bind an ephemeral port nobody can find.
    #[error("PORT must be non-zero")]
    ZeroPort,
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
