//! HTTP API handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use utoipa::ToSchema;

use crate::config::Config;
use crate::frontend::StaticRoot;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "artha.bot";

/// Service version reported by the health check.
pub const SERVICE_VERSION: &str = "0.1.0";

/// Application state shared with handlers.
///
/// Immutable after construction; cloned into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deployment environment name.
    pub environment: Arc<str>,
    /// Pre-built frontend, if it was found at startup.
    pub static_root: Option<StaticRoot>,
    /// Whether the OpenAPI docs are mounted.
    pub api_docs: bool,
}

impl AppState {
    /// Create new app state.
    pub fn new(environment: impl Into<Arc<str>>, static_root: Option<StaticRoot>) -> Self {
        Self {
            environment: environment.into(),
            static_root,
            api_docs: true,
        }
    }

    /// Build state from loaded configuration, resolving the static root.
    pub fn from_config(config: &Config) -> Self {
        Self {
            environment: config.environment.as_str().into(),
            static_root: config.static_root(),
            api_docs: config.api_docs,
        }
    }

    /// Toggle the OpenAPI docs routes.
    pub fn with_api_docs(mut self, enabled: bool) -> Self {
        self.api_docs = enabled;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("development", None)
    }
}

/// Platform features advertised by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Feature {
    /// Robot arm trajectory visualizer.
    Visualizer,
    /// Training dataset browser.
    Datasets,
    /// Experiment tracking.
    Experiments,
}

impl Feature {
    /// Rollout state shown to clients.
    pub fn availability(self) -> &'static str {
        match self {
            Self::Visualizer | Self::Datasets | Self::Experiments => "coming soon",
        }
    }

    /// Fixed feature map for the status report.
    pub fn catalog() -> BTreeMap<String, String> {
        Self::iter()
            .map(|f| (f.to_string(), f.availability().to_string()))
            .collect()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HealthReport {
    /// Always "healthy".
    #[schema(example = "healthy")]
    pub status: String,
    /// Service name.
    #[schema(example = "artha.bot")]
    pub service: String,
    /// Service version.
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Greeting.
    pub message: String,
}

impl HealthReport {
    /// The constant report served for the process lifetime.
    pub fn current() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            message: "Robot arms are warming up...".to_string(),
        }
    }
}

/// Status response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct StatusReport {
    /// Always "online".
    #[schema(example = "online")]
    pub status: String,
    /// Deployment environment.
    #[schema(example = "development")]
    pub environment: String,
    /// Feature name to rollout state.
    pub features: BTreeMap<String, String>,
}

impl StatusReport {
    /// Report for the given environment.
    pub fn for_environment(environment: &str) -> Self {
        Self {
            status: "online".to_string(),
            environment: environment.to_string(),
            features: Feature::catalog(),
        }
    }
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses((status = 200, description = "Service is alive", body = HealthReport))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthReport::current())
}

/// Status handler - environment and feature rollout.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "system",
    responses((status = 200, description = "Service status", body = StatusReport))
)]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusReport::for_environment(&state.environment))
}
