//! HTTP API module: status, health, metrics and documentation endpoints.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use server::serve;
