//! Response documents returned by the status queries.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// Marker reported by a healthy probe.
pub const STATUS_UP: &str = "UP";

/// Response to the greeting query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GreetingResponse {
    /// Greeting text.
    pub message: String,
    /// Human-readable service state.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Current time, RFC 3339 in UTC.
    pub timestamp: String,
}

/// Response to the info query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    /// Application display name.
    pub application: String,
    /// Application version.
    pub version: String,
    /// Author of the service.
    pub author: String,
    /// Short description of the service.
    pub description: String,
    /// Mission line, omitted when not configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    /// Process start time, RFC 3339 in UTC.
    pub start_time: String,
    /// Elapsed time since start as `HH:MM:SS`.
    pub uptime: String,
    /// Route path to description.
    #[schema(value_type = std::collections::HashMap<String, String>)]
    pub endpoints: EndpointCatalog,
}

/// Response to the health query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `UP`.
    pub status: String,
    /// Service name.
    pub application: String,
    /// Application version.
    pub version: String,
    /// Elapsed time since start as `HH:MM:SS`.
    pub uptime: String,
}

/// A documented route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointEntry {
    /// Route path, e.g. `/api/info`.
    pub path: String,
    /// What the route serves.
    pub description: String,
}

/// Ordered mapping from route path to description.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointCatalog {
    entries: Vec<EndpointEntry>,
}

impl EndpointCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route, replacing the description of an existing path.
    pub fn with(mut self, path: impl Into<String>, description: impl Into<String>) -> Self {
        let path = path.into();
        let description = description.into();
        match self.entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => entry.description = description,
            None => self.entries.push(EndpointEntry { path, description }),
        }
        self
    }

    /// Remove a route if present.
    pub fn without(mut self, path: &str) -> Self {
        self.entries.retain(|e| e.path != path);
        self
    }

    /// Description for a route path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.description.as_str())
    }

    /// Whether the catalog documents `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EndpointEntry> {
        self.entries.iter()
    }

    /// Number of documented routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EndpointCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.path, &entry.description)?;
        }
        map.end()
    }
}
