use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::app::users::User;

/// Config file read when `MINICAT_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "minicat.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub users: UsersConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: "./static".to_string(),
        }
    }
}

/// Accounts the user directory starts with.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct UsersConfig(pub Vec<User>);

impl Default for UsersConfig {
    fn default() -> Self {
        Self(vec![User::new("gugu", "password", "hkkang@woowahan.com")])
    }
}

impl UsersConfig {
    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.0.iter()
    }
}

impl Config {
    /// Loads the file named by `MINICAT_CONFIG` (default [`DEFAULT_CONFIG_PATH`]),
    /// then applies the `LISTEN` override.
    ///
    /// A missing file falls back to defaults; an unreadable or invalid one is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("MINICAT_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let cfg = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            tracing::info!(path = %path, "Config file not found, using defaults");
            Self::default()
        };

        Ok(cfg.with_listen_override(std::env::var("LISTEN").ok()))
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml(&content).with_context(|| format!("invalid config file {}", path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn with_listen_override(mut self, listen: Option<String>) -> Self {
        if let Some(addr) = listen {
            self.server.listen_addr = addr;
        }
        self
    }
}
