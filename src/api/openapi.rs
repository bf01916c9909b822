//! OpenAPI specification for the status API.

use utoipa::OpenApi;

use super::handlers;
use crate::status::{GreetingResponse, HealthResponse, InfoResponse};

/// Status API OpenAPI specification
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::greeting,
        handlers::info,
        handlers::health,
        handlers::api_health,
    ),
    components(schemas(GreetingResponse, InfoResponse, HealthResponse)),
    tags(
        (name = "status", description = "Greeting and application information"),
        (name = "health", description = "Liveness and readiness probe"),
    ),
    info(
        title = "Hello Status API",
        description = "Greeting, application info and health probe with process uptime",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_documents_every_json_route() {
        let spec = ApiDoc::openapi();
        for path in ["/api/greeting", "/api/info", "/health", "/api/health"] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
