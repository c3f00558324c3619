//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the pipeline step itself, so the step can be
//! driven programmatically (and tested) without clap or a real pipeline host.

use std::path::PathBuf;

use tracing::{debug, error};

use crate::boundary::{self, BoundaryWarning};
use crate::config::{self, Config};
use crate::error::Result;
use crate::inputs::{validate_inputs, Inputs, PartialInputs};
use crate::pipeline::{emit_outputs, OutputSink};
use crate::version::{update_version, Outputs};

/// Arguments for the version step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowArgs {
    /// Raw pipeline inputs
    pub inputs: PartialInputs,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,
}

/// Result of a successful version step
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Inputs after defaults were applied
    pub inputs: Inputs,

    /// The computed version
    pub outputs: Outputs,

    /// Non-fatal findings on the inputs
    pub warnings: Vec<BoundaryWarning>,
}

/// Compute the next version from raw inputs and an already loaded config.
///
/// Pure apart from logging: nothing is written to the pipeline.
pub fn compute(inputs: PartialInputs, config: &Config) -> Result<WorkflowResult> {
    let inputs = validate_inputs(inputs.with_config(config));

    let warnings = boundary::inspect(&inputs);
    for warning in &warnings {
        debug!(%warning, "Boundary condition found");
    }

    let outputs = update_version(&inputs)?;

    Ok(WorkflowResult {
        inputs,
        outputs,
        warnings,
    })
}

/// Run the version step against a pipeline sink.
///
/// Loads configuration, computes the version and writes the outputs. Outputs are only
/// written once the whole computation succeeded.
pub fn run_workflow(args: &WorkflowArgs, sink: &mut dyn OutputSink) -> Result<WorkflowResult> {
    let config = config::load_config(args.config_path.as_deref())?;
    let result = compute(args.inputs.clone(), &config)?;
    emit_outputs(sink, &result.outputs)?;
    Ok(result)
}

/// Run the version step and convert any error into a step failure.
///
/// This is the single catch boundary: on error the sink is marked failed with the
/// error message and no outputs are written. Returns `None` on failure.
pub fn run_step(args: &WorkflowArgs, sink: &mut dyn OutputSink) -> Result<Option<WorkflowResult>> {
    match run_workflow(args, sink) {
        Ok(result) => Ok(Some(result)),
        Err(e) => {
            error!("Version step failed: {}", e);
            sink.set_failed(&e.to_string())?;
            Ok(None)
        }
    }
}
