//! Shared evaluation step for `check` and `render`.

use std::path::Path;

use crate::advisor::{Advisory, VersionGapAdvisor};
use crate::cli::args::InputArgs;
use crate::config::{load_config, validate, AdvisoryInputs};
use crate::error::Result;

/// Inputs resolved for one run and the advisory they produced.
#[derive(Debug)]
pub struct Evaluation {
    /// Resolved advisor inputs.
    pub inputs: AdvisoryInputs,
    /// The advisory, or `None` when nothing should be shown.
    pub advisory: Option<Advisory>,
}

/// Load config, resolve inputs, and run the advisor.
pub fn evaluate_inputs(
    project_root: &Path,
    config_override: Option<&Path>,
    args: &InputArgs,
) -> Result<Evaluation> {
    let config = load_config(project_root, config_override)?;
    validate(&config)?;

    let inputs = AdvisoryInputs::resolve(
        args.plan_level.as_deref(),
        args.current_version.as_deref(),
        args.latest_version.as_deref(),
        &config,
    )?;

    let advisor = VersionGapAdvisor::new(config.settings);
    let advisory = advisor.evaluate(
        &inputs.plan_level,
        &inputs.current_version,
        &inputs.latest_version,
    );

    Ok(Evaluation { inputs, advisory })
}
