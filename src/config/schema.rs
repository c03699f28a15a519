//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::advisor::AdvisorSettings;

/// Top-level vergap configuration.
///
/// Every field is optional; anything left out falls back to flags,
/// environment variables, or defaults.
///
/// ```yaml
/// plan_level: disabled
/// current_version: 2.3.0
/// latest_version: 2.5.0
/// settings:
///   icon_base_path: /css/images/
///   update_url: http://apt.sourcefabric.org/misc/
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VergapConfig {
    /// Service tier of the installation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_level: Option<String>,

    /// Installed version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,

    /// Latest published version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,

    /// Advisor settings.
    pub settings: AdvisorSettings,
}
