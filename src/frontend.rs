//! Pre-built frontend hosting: asset directory and single-page-app shell.
//!
//! The frontend build drops `index.html` and an `assets/` directory into the
//! static root. Assets are served as plain files; every other unmatched path
//! gets the `index.html` shell so client-side routing can take over.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::{extract::State, response::Html};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::error::FrontendError;

/// Name of the shell document under the static root.
pub const INDEX_FILE: &str = "index.html";

/// Name of the asset subdirectory under the static root.
pub const ASSETS_DIR: &str = "assets";

/// Directory holding the pre-built frontend. Resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoot {
    root: PathBuf,
}

impl StaticRoot {
    /// Wrap a directory without checking that it exists.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return a root only if `path` is an existing directory.
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            Some(Self::new(path))
        } else {
            debug!(path = %path.display(), "static root not found");
            None
        }
    }

    /// The root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// `<root>/assets`.
    pub fn assets_dir(&self) -> PathBuf {
        self.root.join(ASSETS_DIR)
    }

    /// `<root>/index.html`.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Whether the shell document is currently present.
    pub fn has_index(&self) -> bool {
        self.index_path().is_file()
    }

    /// File service for `/assets/*`.
    ///
    /// `ServeDir` rejects `..` segments (raw or percent-encoded) with a 404,
    /// so requests never leave the asset directory.
    pub fn assets_service(&self) -> ServeDir {
        ServeDir::new(self.assets_dir()).append_index_html_on_directories(false)
    }

    /// Read the shell document.
    pub async fn load_index(&self) -> Result<Vec<u8>, FrontendError> {
        match tokio::fs::read(self.index_path()).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FrontendError::NotBuilt),
            Err(e) => Err(FrontendError::Read(e)),
        }
    }
}

/// Fallback handler returning the `index.html` shell for any path.
pub async fn spa_shell(State(root): State<StaticRoot>) -> Result<Html<Vec<u8>>, FrontendError> {
    root.load_index().await.map(Html)
}
