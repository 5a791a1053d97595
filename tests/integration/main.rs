//! End-to-end routing tests against temporary static roots.
//!
//! Run with: cargo test --test integration

use artha_bot::api::{create_router, AppState, HealthReport, StatusReport};
use artha_bot::config::Config;
use artha_bot::frontend::StaticRoot;
use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;
use tree_fs::{Tree, TreeBuilder};

const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"app\"></div></body></html>";
const APP_CSS: &str = "body { background: #101418; }";

/// Static root with a built frontend plus a file outside `assets/`.
fn built_frontend() -> Tree {
    TreeBuilder::default()
        .add_file("index.html", INDEX_HTML)
        .add_file("assets/app.css", APP_CSS)
        .add_file("secret", "do not serve")
        .create()
        .expect("create static tree")
}

fn app_for(tree: &Tree) -> Router {
    let root = StaticRoot::detect(&tree.root);
    assert!(root.is_some(), "static root should exist");
    create_router(AppState::new("development", root))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, body)
}

#[tokio::test]
async fn api_endpoints_unchanged_with_static_root() {
    let tree = built_frontend();

    let (status, _, body) = get(app_for(&tree), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: HealthReport = serde_json::from_slice(&body).unwrap();
    assert_eq!(health, HealthReport::current());

    let (status, _, body) = get(app_for(&tree), "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    let report: StatusReport = serde_json::from_slice(&body).unwrap();
    assert_eq!(report.status, "online");
    for key in ["visualizer", "datasets", "experiments"] {
        assert!(report.features.contains_key(key), "missing feature {key}");
    }
}

#[tokio::test]
async fn api_endpoints_unchanged_without_static_root() {
    let app = create_router(AppState::new("development", None));

    let (status, _, body) = get(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");

    let (status, _, _) = get(app.clone(), "/api/status").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = get(app.clone(), "/visualizer/123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(app, "/assets/app.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unmatched_paths_return_index_shell() {
    let tree = built_frontend();

    for uri in ["/", "/visualizer/123", "/datasets?page=2", "/api/unknown"] {
        let (status, content_type, body) = get(app_for(&tree), uri).await;
        assert_eq!(status, StatusCode::OK, "status for {uri}");
        assert!(
            content_type.unwrap().starts_with("text/html"),
            "content type for {uri}"
        );
        assert_eq!(body, INDEX_HTML.as_bytes(), "body for {uri}");
    }
}

#[tokio::test]
async fn missing_index_reports_frontend_not_built() {
    let tree = TreeBuilder::default()
        .add_file("assets/app.css", APP_CSS)
        .create()
        .expect("create static tree");

    let (status, content_type, body) = get(app_for(&tree), "/visualizer/123").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(content_type.unwrap().starts_with("application/json"));
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Frontend not built" }));
}

#[tokio::test]
async fn assets_are_served_verbatim() {
    let tree = built_frontend();

    let (status, content_type, body) = get(app_for(&tree), "/assets/app.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/css"));
    assert_eq!(body, APP_CSS.as_bytes());
}

#[tokio::test]
async fn missing_asset_is_404_not_shell() {
    let tree = built_frontend();

    let (status, _, body) = get(app_for(&tree), "/assets/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, INDEX_HTML.as_bytes());
}

#[tokio::test]
async fn asset_paths_cannot_escape_assets_dir() {
    let tree = built_frontend();

    for uri in ["/assets/../secret", "/assets/%2e%2e/secret", "/assets/..%2fsecret"] {
        let (status, _, body) = get(app_for(&tree), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "status for {uri}");
        assert_ne!(body, "do not serve".as_bytes(), "body for {uri}");
    }
}

#[tokio::test]
async fn environment_variable_reaches_status_report() {
    std::env::set_var("ENVIRONMENT", "integration");
    let config = Config::load();
    std::env::remove_var("ENVIRONMENT");
    let config = config.expect("load config");

    let app = create_router(AppState::from_config(&config));
    let (status, _, body) = get(app, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["environment"], "integration");
}

#[tokio::test]
async fn empty_environment_is_echoed_verbatim() {
    let vars = vec![("ENVIRONMENT".to_string(), String::new())];
    let config: Config = envy::from_iter(vars).expect("parse config");
    config.validate().expect("empty environment is valid");

    let app = create_router(AppState::from_config(&config));
    let (status, _, body) = get(app, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["environment"], "");
}
