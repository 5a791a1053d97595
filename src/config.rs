//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Result, ServiceError};
use crate::frontend::StaticRoot;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Deployment ===
    /// Deployment environment name, echoed by `/api/status`.
    #[serde(default = "default_environment")]
    pub environment: String,

    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_host")]
    pub bind_host: IpAddr,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the pre-built frontend (`index.html` + `assets/`).
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Serve Swagger UI at `/docs` and the document at `/openapi.json`.
    #[serde(default = "default_true")]
    pub api_docs: bool,

    /// Port for the Prometheus scrape listener. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit JSON log lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_bind_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn invalid(reason: &str) -> ServiceError {
    ServiceError::InvalidConfig(reason.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            bind_host: default_bind_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            api_docs: default_true(),
            metrics_port: None,
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(invalid("PORT must be non-zero"));
        }

        if self.metrics_port == Some(self.port) {
            return Err(invalid("METRICS_PORT must differ from PORT"));
        }

        Ok(())
    }

    /// Socket address of the HTTP server.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    /// Socket address of the metrics listener, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        self.metrics_port.map(|port| SocketAddr::new(self.bind_host, port))
    }

    /// Resolve the static root. `None` when the directory does not exist.
    pub fn static_root(&self) -> Option<StaticRoot> {
        StaticRoot::detect(&self.static_dir)
    }
}
