//! HTTP API module for health, status, docs and frontend routes.

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::{AppState, HealthReport, StatusReport};
pub use openapi::ApiDoc;
pub use routes::create_router;
