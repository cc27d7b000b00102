//! Engine configuration persistence.
//!
//! Stores look-and-feel search paths and engine defaults as JSON at
//! `<config dir>/falagard/config.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::falagard::UnloadPolicy;

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("falagard")
        .join("config.json")
}

/// Persisted engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Files or directories scanned for look-and-feel definitions.
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
    #[serde(default)]
    pub unload_policy: UnloadPolicy,
    /// Image drawn behind selected list view items.
    #[serde(default)]
    pub default_selection_brush: Option<String>,
    /// `tracing_subscriber` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("looknfeel")]
}

fn default_log_filter() -> String {
    "falagard=info".into()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_paths: default_search_paths(),
            unload_policy: UnloadPolicy::default(),
            default_selection_brush: None,
            log_filter: default_log_filter(),
            path: default_path(),
        }
    }
}

impl EngineConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::debug!("using default config: {e}");
            Self { path, ..Self::default() }
        })
    }

    /// Load from `path`, reporting a missing or malformed file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let mut config: Self =
            serde_json::from_str(&contents).map_err(|e| Error::parse(format!("{}: {e}", path.display())))?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Use `path` for subsequent saves.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<()> {
        let io_err = |source| Error::Io { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::parse(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(io_err)
    }
}
