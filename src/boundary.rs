use std::fmt;

use crate::domain::{previous_iteration, BranchContext, MainlineBranches};
use crate::inputs::Inputs;

/// Input conditions that do not stop a version update but are worth reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A previous branch version was given but its counter could not be read
    MalformedBranchVersion { version: String },
    /// The additional name does not occur in the latest mainline version
    AdditionalNameNotFound { name: String, version: String },
    /// No mainline branches are configured, every branch gets a branch version
    EmptyMainlineList { list: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MalformedBranchVersion { version } => {
                write!(
                    f,
                    "Cannot read counter from branch version '{}', starting at 1",
                    version
                )
            }
            BoundaryWarning::AdditionalNameNotFound { name, version } => {
                write!(
                    f,
                    "Additional name '{}' not found in version '{}'",
                    name, version
                )
            }
            BoundaryWarning::EmptyMainlineList { list } => {
                write!(f, "Mainline branch list '{}' names no branches", list)
            }
        }
    }
}

/// Inspect validated inputs for conditions worth warning about.
///
/// Only conditions relevant to the path the dispatcher will take are reported.
pub fn inspect(inputs: &Inputs) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    let mainline = MainlineBranches::parse(&inputs.mainline_versioning_branches);
    if mainline.is_empty() {
        warnings.push(BoundaryWarning::EmptyMainlineList {
            list: inputs.mainline_versioning_branches.clone(),
        });
    }

    let branch = BranchContext::new(inputs.branch_name.as_str(), &mainline);
    if branch.is_mainline {
        if !inputs.additional_name.is_empty()
            && !inputs.latest_main_version.contains(&inputs.additional_name)
        {
            warnings.push(BoundaryWarning::AdditionalNameNotFound {
                name: inputs.additional_name.clone(),
                version: inputs.latest_main_version.clone(),
            });
        }
    } else if !inputs.latest_branch_version.is_empty()
        && previous_iteration(&inputs.latest_branch_version).is_none()
    {
        warnings.push(BoundaryWarning::MalformedBranchVersion {
            version: inputs.latest_branch_version.clone(),
        });
    }

    warnings
}
