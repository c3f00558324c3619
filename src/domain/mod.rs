//! Domain logic - pure version rules independent of the pipeline host

pub mod branch;
pub mod prerelease;
pub mod version;

pub use branch::{sanitize_branch_name, BranchContext, MainlineBranches};
pub use prerelease::{previous_iteration, BranchPreRelease};
pub use version::{strip_additional_name, SemVersion, VersionBump};
