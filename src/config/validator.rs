//! Configuration validation rules.
//!
//! - `icon_base_path` must not be empty
//! - `update_url` must be an http(s) URL
//! - `trigger_plan_level` must not be empty

use crate::config::schema::VergapConfig;
use crate::error::{Result, VergapError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &VergapConfig) -> Vec<ValidationError> {
    let settings = &config.settings;
    let mut errors = Vec::new();

    if settings.icon_base_path.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-icon-base-path".to_string(),
            message: "settings.icon_base_path must not be empty".to_string(),
        });
    }

    if !(settings.update_url.starts_with("http://") || settings.update_url.starts_with("https://"))
    {
        errors.push(ValidationError {
            rule: "invalid-update-url".to_string(),
            message: format!(
                "settings.update_url must start with http:// or https:// (got '{}')",
                settings.update_url
            ),
        });
    }

    if settings.trigger_plan_level.is_empty() {
        errors.push(ValidationError {
            rule: "empty-trigger-plan-level".to_string(),
            message: "settings.trigger_plan_level must not be empty".to_string(),
        });
    }

    errors
}

/// Validate and return a single error summarizing every problem.
pub fn validate(config: &VergapConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(VergapError::ConfigValidationError { message })
}
