//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::VergapConfig;
use crate::error::{Result, VergapError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root that holds config files.
pub const CONFIG_DIR: &str = ".vergap";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.vergap/config.yml`)
/// 2. Local overrides (`.vergap/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .vergap/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .vergap/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VergapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VergapError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| VergapError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project's config files.
///
/// A project without any config file gets [`VergapConfig::default`].
pub fn load_merged_config(project_root: &Path) -> Result<VergapConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        configs.push(load_config_value(path)?);
    }

    from_merged(
        merge_configs(&configs),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging,
/// and a missing file is an error. Otherwise, discovers and merges the
/// project's config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<VergapConfig> {
    match config_override {
        Some(path) => {
            let value = load_config_value(path)?;
            from_merged(merge_configs(&[value]), path)
        }
        None => load_merged_config(project_root),
    }
}

fn from_merged(merged: serde_yaml::Value, path: &Path) -> Result<VergapConfig> {
    serde_yaml::from_value(merged).map_err(|e| VergapError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
