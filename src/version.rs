use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{
    previous_iteration, sanitize_branch_name, BranchContext, BranchPreRelease, MainlineBranches,
    SemVersion, VersionBump,
};
use crate::error::Result;
use crate::inputs::Inputs;

/// Value of the per-component outputs when a branch version was produced
pub const BRANCH_VERSION_INCREASED: &str = "branch-version-increased";

/// Result of a single version update, handed to the pipeline adapter.
///
/// For mainline bumps `major`, `minor` and `patch` each hold
/// `<additional name><version prefix><that component>` (a single component, not a dotted path).
/// For branch bumps they hold [`BRANCH_VERSION_INCREASED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outputs {
    pub new_version: String,
    pub new_version_raw: String,
    pub prefix: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl Outputs {
    /// Whether this result came from the branch incrementer
    pub fn is_branch_version(&self) -> bool {
        self.major == BRANCH_VERSION_INCREASED
    }
}

/// Bumps the latest mainline version according to `strategy`.
///
/// The prefix parsed from `latest_main_version` is discarded: the output is decorated
/// with `additional_name + version_prefix`, so a stored `v1.2.3` can be bumped to `1.2.4`.
///
/// # Errors
/// * `InvalidVersionFormat` - `latest_main_version` does not parse
/// * `UnknownStrategy` - `strategy` is not `patch`, `minor` or `major`
///
/// # Example
/// ```ignore
/// let out = increment_main_version("server.v1.2.3", "minor", "v", "server.")?;
/// assert_eq!(out.new_version, "server.v1.3.0");
/// assert_eq!(out.new_version_raw, "1.3.0");
/// ```
pub fn increment_main_version(
    latest_main_version: &str,
    strategy: &str,
    version_prefix: &str,
    additional_name: &str,
) -> Result<Outputs> {
    let current = SemVersion::parse(additional_name, latest_main_version)?;
    let bump: VersionBump = strategy.parse()?;
    let next = current.bump(bump)?;

    let decoration = format!("{}{}", additional_name, version_prefix);
    let new_version_raw = next.raw();

    info!(
        from = latest_main_version,
        strategy = bump.name(),
        to = %new_version_raw,
        "Mainline version bumped"
    );

    Ok(Outputs {
        new_version: format!("{}{}", decoration, new_version_raw),
        new_version_raw,
        prefix: version_prefix.to_string(),
        major: format!("{}{}", decoration, next.major),
        minor: format!("{}{}", decoration, next.minor),
        patch: format!("{}{}", decoration, next.patch),
    })
}

/// Derives the next branch-scoped version.
///
/// Never fails: an absent or unreadable `latest_branch_version` restarts the counter,
/// so the first build on a branch gets `.1`.
///
/// # Example
/// ```ignore
/// let out = increment_branch_version("1.2.3", "v1.2.3-feature-new.5", "feature/new", "v", "");
/// assert_eq!(out.new_version, "v1.2.3-feature-new.6");
/// ```
pub fn increment_branch_version(
    latest_main_version: &str,
    latest_branch_version: &str,
    branch_name: &str,
    version_prefix: &str,
    additional_name: &str,
) -> Outputs {
    let branch_id = sanitize_branch_name(additional_name, branch_name);

    let start = BranchPreRelease::for_branch(version_prefix, latest_main_version, &branch_id);
    let previous = match previous_iteration(latest_branch_version) {
        Some(iteration) => BranchPreRelease { iteration, ..start },
        None => {
            debug!(
                latest_branch_version,
                "No usable previous branch version, counter starts over"
            );
            start
        }
    };

    let next = previous.increment_iteration();

    info!(
        branch = branch_name,
        iteration = next.iteration,
        "Branch version increased"
    );

    Outputs {
        new_version: format!("{}{}", additional_name, next),
        new_version_raw: next.iteration.to_string(),
        prefix: next.prefix,
        major: BRANCH_VERSION_INCREASED.to_string(),
        minor: BRANCH_VERSION_INCREASED.to_string(),
        patch: BRANCH_VERSION_INCREASED.to_string(),
    }
}

/// Routes to the mainline or branch incrementer depending on the branch name
pub fn update_version(inputs: &Inputs) -> Result<Outputs> {
    let mainline = MainlineBranches::parse(&inputs.mainline_versioning_branches);
    let branch = BranchContext::new(inputs.branch_name.as_str(), &mainline);

    debug!(
        branch = %branch.name,
        mainline = branch.is_mainline,
        "Dispatching version update"
    );

    if branch.is_mainline {
        increment_main_version(
            &inputs.latest_main_version,
            &inputs.strategy,
            &inputs.version_prefix,
            &inputs.additional_name,
        )
    } else {
        Ok(increment_branch_version(
            &inputs.latest_main_version,
            &inputs.latest_branch_version,
            &branch.name,
            &inputs.version_prefix,
            &inputs.additional_name,
        ))
    }
}
