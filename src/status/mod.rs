//! Status reporting: uptime accounting and the greeting, info and health queries.

pub mod reporter;
pub mod types;
pub mod uptime;

pub use reporter::{Metadata, StatusReporter};
pub use types::{EndpointCatalog, GreetingResponse, HealthResponse, InfoResponse};
pub use uptime::format_uptime;
