//! Configuration loading, parsing, and validation for vergap.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - Input resolution in [`inputs`]
//!
//! # Example
//!
//! ```
//! use vergap::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".vergap");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "plan_level: disabled").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.plan_level, Some("disabled".to_string()));
//! ```
//!
//! # Configuration File Locations
//!
//! vergap discovers and merges configuration in this order:
//! 1. Project config (`.vergap/config.yml`)
//! 2. Local overrides (`.vergap/config.local.yml`)

pub mod inputs;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use inputs::AdvisoryInputs;
pub use loader::{load_config, load_config_value, load_merged_config, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_configs};
pub use schema::VergapConfig;
pub use validator::{validate, validate_config, ValidationError};
