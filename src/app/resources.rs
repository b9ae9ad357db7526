//! Static resource providers.
//!
//! A provider maps a logical request path such as `/index.html` or
//! `/css/styles.css` to the bytes of that resource.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait StaticResources: Send + Sync {
    fn load(&self, path: &str) -> Result<Vec<u8>, ResourceError>;
}

/// Serves files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a request path onto the root. Paths that would escape it yield `None`.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        (safe && relative.components().next().is_some()).then(|| self.root.join(relative))
    }
}

impl StaticResources for DirectoryResources {
    fn load(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        let full_path = self
            .resolve(path)
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))?;

        tracing::debug!(path = %full_path.display(), "Serving static file");

        std::fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::IsADirectory => {
                ResourceError::NotFound(path.to_string())
            }
            _ => ResourceError::Io {
                path: path.to_string(),
                source: e,
            },
        })
    }
}

/// Fixed in-memory bundle, keyed by request path.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), body.into());
        self
    }
}

impl StaticResources for MemoryResources {
    fn load(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }
}
