//! Raw pipeline inputs and their normalization into a fully populated record.

use serde::Serialize;

use crate::config::Config;

pub const DEFAULT_STRATEGY: &str = "patch";
pub const DEFAULT_LATEST_MAIN_VERSION: &str = "0.0.0";
pub const DEFAULT_BRANCH_NAME: &str = "master";
pub const DEFAULT_MAINLINE_VERSIONING_BRANCHES: &str = "main,master";

/// Inputs as read from the pipeline; any field may be absent or blank
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialInputs {
    pub latest_main_version: Option<String>,
    pub latest_branch_version: Option<String>,
    pub branch_name: Option<String>,
    pub strategy: Option<String>,
    pub version_prefix: Option<String>,
    pub additional_name: Option<String>,
    pub mainline_versioning_branches: Option<String>,
}

/// Validated inputs, every field populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inputs {
    pub latest_main_version: String,
    pub latest_branch_version: String,
    pub branch_name: String,
    pub strategy: String,
    pub version_prefix: String,
    /// Qualifier including its trailing `.` (e.g. `server.`), or empty
    pub additional_name: String,
    pub mainline_versioning_branches: String,
}

/// True for absent, empty or all-whitespace values
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(Some(v.as_str())))
}

fn or_default(value: Option<String>, default: &str) -> String {
    non_blank(value).unwrap_or_else(|| default.to_string())
}

impl PartialInputs {
    /// Fill blank fields from the project configuration file.
    ///
    /// Only the fields a config file may carry are considered; non-blank inputs win.
    pub fn with_config(self, config: &Config) -> Self {
        let defaults = &config.defaults;
        PartialInputs {
            strategy: non_blank(self.strategy).or_else(|| defaults.strategy.clone()),
            version_prefix: non_blank(self.version_prefix)
                .or_else(|| defaults.version_prefix.clone()),
            additional_name: non_blank(self.additional_name)
                .or_else(|| defaults.additional_name.clone()),
            mainline_versioning_branches: non_blank(self.mainline_versioning_branches)
                .or_else(|| defaults.mainline_versioning_branches.clone()),
            ..self
        }
    }
}

/// Substitute defaults for blank fields.
///
/// | field | default |
/// |---|---|
/// | `strategy` | `patch` |
/// | `latest_main_version` | `0.0.0` |
/// | `latest_branch_version` | empty |
/// | `branch_name` | `master` |
/// | `version_prefix` | empty |
/// | `mainline_versioning_branches` | `main,master` |
///
/// A non-blank `additional_name` gets a trailing `.`; a blank one becomes empty.
/// Non-blank values are kept verbatim, surrounding whitespace included.
pub fn validate_inputs(partial: PartialInputs) -> Inputs {
    let additional_name = match non_blank(partial.additional_name) {
        Some(name) => format!("{}.", name),
        None => String::new(),
    };

    Inputs {
        latest_main_version: or_default(partial.latest_main_version, DEFAULT_LATEST_MAIN_VERSION),
        latest_branch_version: or_default(partial.latest_branch_version, ""),
        branch_name: or_default(partial.branch_name, DEFAULT_BRANCH_NAME),
        strategy: or_default(partial.strategy, DEFAULT_STRATEGY),
        version_prefix: or_default(partial.version_prefix, ""),
        additional_name,
        mainline_versioning_branches: or_default(
            partial.mainline_versioning_branches,
            DEFAULT_MAINLINE_VERSIONING_BRANCHES,
        ),
    }
}
