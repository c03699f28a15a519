//! Render command implementation.
//!
//! The `vergap render` command prints the advisory as an HTML fragment
//! for embedding into a page.

use std::path::{Path, PathBuf};

use crate::advisor::render_html;
use crate::cli::args::RenderArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::evaluation::evaluate_inputs;

/// The render command implementation.
pub struct RenderCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: RenderArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let eval = evaluate_inputs(
            &self.project_root,
            self.config_override.as_deref(),
            &self.args.inputs,
        )?;

        let html = render_html(eval.advisory.as_ref());
        if !html.is_empty() {
            ui.message(&html);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::InputArgs;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn render(plan: &str, current: &str, latest: &str) -> MockUI {
        let temp = TempDir::new().unwrap();
        let args = RenderArgs {
            inputs: InputArgs {
                plan_level: Some(plan.to_string()),
                current_version: Some(current.to_string()),
                latest_version: Some(latest.to_string()),
            },
        };
        let mut ui = MockUI::new();
        RenderCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap();
        ui
    }

    #[test]
    fn prints_fragment() {
        let ui = render("disabled", "2.3.0", "2.5.0");
        assert_eq!(ui.messages().len(), 1);
        assert!(ui.messages()[0]
            .contains("<div id='version_current' style='display:none'>2.3.0</div>"));
        assert!(ui.messages()[0].contains("icon_update.png"));
    }

    #[test]
    fn prints_nothing_when_empty() {
        let ui = render("disabled", "not-a-version", "2.5.0");
        assert!(ui.messages().is_empty());
    }
}
