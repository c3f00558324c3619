//! Human-facing output.
//!
//! Everything here goes to stderr so stdout stays free for machine-readable output
//! (`name=value` lines, JSON, workflow commands).

use console::style;

use crate::boundary::BoundaryWarning;
use crate::inputs::Inputs;
use crate::version::Outputs;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summarise the validated inputs that drive the update
pub fn display_inputs(inputs: &Inputs) {
    display_status(&format!(
        "Branch '{}' (mainline: {})",
        inputs.branch_name, inputs.mainline_versioning_branches
    ));
    display_status(&format!(
        "Latest main version '{}', latest branch version '{}'",
        inputs.latest_main_version, inputs.latest_branch_version
    ));
}

/// Display the computed version.
///
/// Shows the full version, the raw value and, for mainline bumps, the per-component values.
pub fn display_outputs(outputs: &Outputs) {
    eprintln!("\n{}", style("New Version:").bold());
    eprintln!("  Version: {}", style(&outputs.new_version).green());
    eprintln!("  Raw:     {}", outputs.new_version_raw);
    eprintln!("  Prefix:  {}", outputs.prefix);

    if !outputs.is_branch_version() {
        eprintln!(
            "  Parts:   {} / {} / {}",
            outputs.major, outputs.minor, outputs.patch
        );
    }
}
