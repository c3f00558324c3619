use crate::error::{Result, VersionBumpError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static SEM_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]*)(\d+)\.(\d+)\.(\d+)$").expect("Invalid sem version regex")
});

/// Removes the first occurrence of `additional_name` from `value`.
///
/// The match is not anchored: a qualifier like `"server."` is removed wherever it
/// first appears. An empty qualifier leaves the value untouched.
pub fn strip_additional_name(additional_name: &str, value: &str) -> String {
    if additional_name.is_empty() {
        value.to_string()
    } else {
        value.replacen(additional_name, "", 1)
    }
}

/// Parsed mainline version with its optional alphabetic lead-in (e.g. `v` in `v1.2.3`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SemVersion {
    pub prefix: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVersion {
    /// Create a new version without a prefix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVersion {
            prefix: String::new(),
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string after stripping `additional_name` from it.
    ///
    /// Accepts `[a-zA-Z]*<major>.<minor>.<patch>` and nothing else. The error carries
    /// the stripped string that failed to match.
    ///
    /// # Examples
    /// ```ignore
    /// let v = SemVersion::parse("server.", "server.v1.2.3")?;
    /// assert_eq!(v.prefix, "v");
    /// assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
    /// ```
    pub fn parse(additional_name: &str, version: &str) -> Result<Self> {
        let raw = strip_additional_name(additional_name, version);

        let captures = SEM_VERSION_REGEX
            .captures(&raw)
            .ok_or_else(|| VersionBumpError::invalid_version(raw.as_str()))?;

        let component = |index: usize| -> Result<u64> {
            captures[index]
                .parse::<u64>()
                .map_err(|_| VersionBumpError::invalid_version(raw.as_str()))
        };

        Ok(SemVersion {
            prefix: captures[1].to_string(),
            major: component(2)?,
            minor: component(3)?,
            patch: component(4)?,
        })
    }

    /// Bump version according to bump type, keeping the parsed prefix
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = || VersionBumpError::VersionOverflow(self.to_string());

        let (major, minor, patch) = match bump_type {
            VersionBump::Major => (self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            VersionBump::Minor => (
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            VersionBump::Patch => (
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };

        Ok(SemVersion {
            prefix: self.prefix.clone(),
            major,
            minor,
            patch,
        })
    }

    /// The bare `major.minor.patch` form without any prefix
    pub fn raw(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )
    }
}

/// Version bump strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Strategy name as accepted on input
    pub fn name(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl FromStr for VersionBump {
    type Err = VersionBumpError;

    /// Exact, case-sensitive match on `patch`, `minor` or `major`
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch" => Ok(VersionBump::Patch),
            "minor" => Ok(VersionBump::Minor),
            "major" => Ok(VersionBump::Major),
            other => Err(VersionBumpError::unknown_strategy(other)),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
