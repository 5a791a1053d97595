//! HTTP API route definitions.

use axum::{middleware, routing::get, routing::MethodRouter, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{health, status, AppState};
use super::openapi::docs_router;
use crate::frontend::{spa_shell, StaticRoot};
use crate::metrics::{track_requests, MountedRoutes};

/// Create the full application router.
///
/// Priority: API endpoints, docs, `/assets/*`, then the `index.html` shell
/// for everything else. Without a static root only the API and docs exist.
pub fn create_router(state: AppState) -> Router {
    let mounted = MountedRoutes {
        frontend: state.static_root.is_some(),
        docs: state.api_docs,
    };
    let mut router = api_router();

    if state.api_docs {
        router = router.merge(docs_router::<AppState>());
    }

    if let Some(root) = state.static_root.clone() {
        router = with_frontend(router, root);
    }

    router
        .with_state(state)
        .layer(middleware::from_fn_with_state(mounted, track_requests))
        .layer(TraceLayer::new_for_http())
}

/// Create the JSON API routes only.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/status", get(status))
}

/// Mount `/assets/*` and the single-page-app fallback.
fn with_frontend(router: Router<AppState>, root: StaticRoot) -> Router<AppState> {
    if root.has_index() {
        info!(root = %root.path().display(), "Serving frontend");
    } else {
        warn!(
            root = %root.path().display(),
            "Static root has no index.html, frontend routes will report it is not built"
        );
    }

    let shell: MethodRouter = get(spa_shell).with_state(root.clone());

    router
        .nest_service("/assets", root.assets_service())
        .fallback_service(shell)
}
