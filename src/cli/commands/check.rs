//! Check command implementation.
//!
//! The `vergap check` command shows how far behind the installation is.

use std::path::{Path, PathBuf};

use crate::advisor::Severity;
use crate::cli::args::CheckArgs;
use crate::error::{Result, VergapError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::evaluation::evaluate_inputs;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let eval = evaluate_inputs(
            &self.project_root,
            self.config_override.as_deref(),
            &self.args.inputs,
        )?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&eval.advisory)
                .map_err(|e| VergapError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Version status");

        let Some(advisory) = eval.advisory else {
            ui.message(&format!(
                "No advisory for plan level '{}' ({} -> {})",
                eval.inputs.plan_level, eval.inputs.current_version, eval.inputs.latest_version
            ));
            return Ok(CommandResult::success());
        };

        match advisory.severity {
            Severity::UpToDate => ui.success(&advisory.summary),
            Severity::MinorLag | Severity::ModerateLag => ui.warning(&advisory.summary),
            Severity::SevereLag => ui.error(&advisory.summary),
        }
        ui.message(&format!("Current version: {}", advisory.current_version));
        ui.message(&format!("Icon: {}", advisory.icon_path));

        Ok(CommandResult::success())
    }
}
