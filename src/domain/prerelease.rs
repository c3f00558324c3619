//! Branch-scoped pre-release versions
//!
//! Feature branches are versioned as `<prefix><main version>-<branch id>.<n>`, where `n`
//! counts the builds made on that branch. A previous branch version that cannot be read
//! restarts the count instead of failing the build.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BRANCH_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^.]+\.[^.]+\.[^.]+-.*\.(\d+)$").expect("Invalid branch version regex")
});

/// Extract the trailing counter from a previous branch version.
///
/// Returns `None` when the string is not shaped like `<x>.<y>.<z>-<suffix>.<digits>`
/// or the counter does not fit in a `u64`.
///
/// # Examples
/// ```ignore
/// assert_eq!(previous_iteration("v1.2.3-feature-new.5"), Some(5));
/// assert_eq!(previous_iteration(""), None);
/// ```
pub fn previous_iteration(latest_branch_version: &str) -> Option<u64> {
    BRANCH_VERSION_REGEX
        .captures(latest_branch_version)
        .and_then(|captures| captures[1].parse::<u64>().ok())
}

/// A branch pre-release: everything before the counter, plus the counter itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPreRelease {
    /// `<version prefix><main version>-<branch id>`
    pub prefix: String,
    pub iteration: u64,
}

impl BranchPreRelease {
    pub fn new(prefix: impl Into<String>, iteration: u64) -> Self {
        BranchPreRelease {
            prefix: prefix.into(),
            iteration,
        }
    }

    /// Builds the prefix from its parts and starts the counter at 0
    pub fn for_branch(version_prefix: &str, latest_main_version: &str, branch_id: &str) -> Self {
        BranchPreRelease::new(
            format!("{}{}-{}", version_prefix, latest_main_version, branch_id),
            0,
        )
    }

    /// Increment the iteration number
    pub fn increment_iteration(&self) -> Self {
        BranchPreRelease {
            prefix: self.prefix.clone(),
            iteration: self.iteration.saturating_add(1),
        }
    }
}

impl fmt::Display for BranchPreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.prefix, self.iteration)
    }
}
