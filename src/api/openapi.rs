//! OpenAPI document and Swagger UI.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, HealthReport, StatusReport};

/// Swagger UI mount point.
pub const DOCS_PATH: &str = "/docs";

/// OpenAPI JSON document path.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// OpenAPI description of the JSON endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "artha.bot",
        description = "ML Robotics Platform - Visualize robot arm training data",
        version = "0.1.0"
    ),
    paths(handlers::health, handlers::status),
    components(schemas(HealthReport, StatusReport)),
    tags((name = "system", description = "Service health and status"))
)]
pub struct ApiDoc;

/// Routes for `/docs` and `/openapi.json`.
pub fn docs_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
        .into()
}
