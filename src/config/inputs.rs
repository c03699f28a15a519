//! Resolution of the three advisor inputs.
//!
//! Explicit values (CLI flags, or their environment variables) win over the
//! config file. An input supplied by neither is an error.

use serde::Serialize;

use crate::config::schema::VergapConfig;
use crate::error::{Result, VergapError};

/// The values the advisor evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryInputs {
    /// Service tier of the installation.
    pub plan_level: String,
    /// Installed version string.
    pub current_version: String,
    /// Latest published version string.
    pub latest_version: String,
}

impl AdvisoryInputs {
    /// Resolve inputs from explicit overrides, falling back to `config`.
    pub fn resolve(
        plan_level: Option<&str>,
        current_version: Option<&str>,
        latest_version: Option<&str>,
        config: &VergapConfig,
    ) -> Result<Self> {
        Ok(Self {
            plan_level: pick("plan_level", plan_level, config.plan_level.as_deref())?,
            current_version: pick(
                "current_version",
                current_version,
                config.current_version.as_deref(),
            )?,
            latest_version: pick(
                "latest_version",
                latest_version,
                config.latest_version.as_deref(),
            )?,
        })
    }
}

fn pick(name: &str, explicit: Option<&str>, configured: Option<&str>) -> Result<String> {
    explicit
        .or(configured)
        .map(str::to_string)
        .ok_or_else(|| VergapError::MissingInput {
            name: name.to_string(),
        })
}
