use crate::domain::version::strip_additional_name;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("Invalid branch name regex"));

/// Set of branch names that receive mainline (major.minor.patch) versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainlineBranches {
    names: Vec<String>,
}

impl MainlineBranches {
    /// Parse a comma-separated list such as `"main,master"`.
    ///
    /// Entries are kept verbatim: `"main, master"` names `main` and ` master`.
    pub fn parse(list: &str) -> Self {
        let names = list.split(',').map(str::to_string).collect();

        MainlineBranches { names }
    }

    pub fn contains(&self, branch_name: &str) -> bool {
        self.names.iter().any(|name| name == branch_name)
    }

    /// True when every entry is blank, so no real branch can match
    pub fn is_empty(&self) -> bool {
        self.names.iter().all(|name| name.trim().is_empty())
    }
}

/// The branch being versioned, classified against the mainline set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_mainline: bool,
}

impl BranchContext {
    /// Create a new branch context
    pub fn new(name: impl Into<String>, mainline: &MainlineBranches) -> Self {
        let name = name.into();
        let is_mainline = mainline.contains(&name);

        BranchContext { name, is_mainline }
    }
}

/// Turns a branch name into a version identifier.
///
/// Removes the first occurrence of `additional_name`, replaces every character outside
/// `[a-zA-Z0-9]` with `-` and lowercases the result: `feature/New` -> `feature-new`.
pub fn sanitize_branch_name(additional_name: &str, branch_name: &str) -> String {
    let stripped = strip_additional_name(additional_name, branch_name);
    NON_ALPHANUMERIC_REGEX
        .replace_all(&stripped, "-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_mainline() -> MainlineBranches {
        MainlineBranches::parse("main,master")
    }

    #[test]
    fn test_main_branch() {
        let branch = BranchContext::new("main", &default_mainline());
        assert!(branch.is_mainline);
    }

    #[test]
    fn test_master_branch() {
        let branch = BranchContext::new("master", &default_mainline());
        assert!(branch.is_mainline);
    }

    #[test]
    fn test_develop_branch() {
        let branch = BranchContext::new("develop", &default_mainline());
        assert!(!branch.is_mainline);
    }

    #[test]
    fn test_custom_mainline_list() {
        let mainline = MainlineBranches::parse("develop,release");
        assert!(BranchContext::new("release", &mainline).is_mainline);
        assert!(!BranchContext::new("main", &mainline).is_mainline);
    }

    #[test]
    fn test_mainline_match_is_exact() {
        let mainline = default_mainline();
        assert!(!mainline.contains("Main"));
        assert!(!mainline.contains("main2"));
        assert!(!mainline.contains("feature/main"));
    }

    #[test]
    fn test_mainline_entries_not_trimmed() {
        let mainline = MainlineBranches::parse("main, master");
        assert!(mainline.contains("main"));
        assert!(mainline.contains(" master"));
        assert!(!mainline.contains("master"));
        assert!(!BranchContext::new("master", &mainline).is_mainline);
    }

    #[test]
    fn test_empty_mainline_list() {
        assert!(MainlineBranches::parse("").is_empty());
        assert!(MainlineBranches::parse(" , ,").is_empty());
        assert!(!MainlineBranches::parse(" ,main").is_empty());
        assert!(!MainlineBranches::parse("").contains("main"));
    }

    #[test]
    fn test_sanitize_slash() {
        assert_eq!(sanitize_branch_name("", "feature/new"), "feature-new");
    }

    #[test]
    fn test_sanitize_lowercases() {
        assert_eq!(sanitize_branch_name("", "Feature/JIRA-123_fix"), "feature-jira-123-fix");
    }

    #[test]
    fn test_sanitize_every_character_replaced() {
        assert_eq!(sanitize_branch_name("", "a..b"), "a--b");
        assert_eq!(sanitize_branch_name("", "ünï"), "-n-");
    }

    #[test]
    fn test_sanitize_strips_additional_name() {
        assert_eq!(sanitize_branch_name("server.", "server.feature/x"), "feature-x");
        assert_eq!(sanitize_branch_name("server.", "feature/x"), "feature-x");
    }

    #[test]
    fn test_sanitize_strip_is_unanchored() {
        assert_eq!(sanitize_branch_name("server.", "feature/server.x"), "feature-x");
        // only the first occurrence goes
        assert_eq!(
            sanitize_branch_name("server.", "server.fix/server.y"),
            "fix-server-y"
        );
    }
}
