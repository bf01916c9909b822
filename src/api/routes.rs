//! HTTP API route definitions.

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{api_health, greeting, health, info, metrics, AppState};
use super::openapi::ApiDoc;

/// Create the full application router.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let mut router: Router = Router::new()
        // Health endpoints
        .route("/health", get(health))
        .route("/api/health", get(api_health))
        // Status endpoints
        .route("/api/greeting", get(greeting))
        .route("/api/info", get(info))
        // Uptime gauges
        .route("/metrics", get(metrics))
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs/ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Everything else, including `/`, comes from the dashboard bundle.
    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
}
