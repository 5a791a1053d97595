//! artha.bot backend.
//!
//! Serves the ML robotics platform: two informational JSON endpoints and the
//! pre-built frontend bundle.
//!
//! # Routing
//!
//! Requests are matched in priority order:
//!
//! ```text
//! GET /api/health   -> fixed health report
//! GET /api/status   -> environment + feature rollout
//! GET /docs         -> Swagger UI (optional), /openapi.json
//! GET /assets/*     -> files under <static>/assets
//! GET /*            -> <static>/index.html (single-page-app shell)
//! ```
//!
//! The last two only exist when the static directory is present at startup.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, OpenAPI document and router
//! - [`frontend`]: Static root, asset service and shell fallback
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod frontend;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
