use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, VersionBumpError};
use crate::pipeline::OutputSink;
use crate::ui;

/// Escape a message for use in a workflow command (`%`, `\r`, `\n`)
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The `::error::` workflow command that marks a step as failed
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Format one output entry for the `GITHUB_OUTPUT` file.
///
/// Single-line values use `name=value`; values containing a line break use the
/// `name<<DELIMITER` form with a delimiter that does not occur in the value.
pub fn format_output_entry(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let mut delimiter = format!("ghadelimiter_{}", std::process::id());
    while value.contains(&delimiter) || name.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

/// Output sink for GitHub Actions: appends to the `GITHUB_OUTPUT` file
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GithubOutputFile { path: path.into() }
    }

    fn append(&self, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                VersionBumpError::output(format!(
                    "Cannot open output file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl OutputSink for GithubOutputFile {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.set_outputs(&[(name, value)])
    }

    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> Result<()> {
        let content: String = outputs
            .iter()
            .map(|(name, value)| format_output_entry(name, value))
            .collect();

        debug!(path = %self.path.display(), count = outputs.len(), "Writing step outputs");
        self.append(&content)
    }

    fn set_failed(&mut self, message: &str) -> Result<()> {
        println!("{}", error_command(message));
        Ok(())
    }
}

/// Output sink for local runs: prints `name=value` lines on stdout
#[derive(Debug)]
pub struct StdoutSink {
    print_entries: bool,
}

impl StdoutSink {
    pub fn new() -> Self {
        StdoutSink {
            print_entries: true,
        }
    }

    /// Only reports failures, leaving stdout to another format such as JSON
    pub fn failures_only() -> Self {
        StdoutSink {
            print_entries: false,
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for StdoutSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        if self.print_entries {
            print!("{}", format_output_entry(name, value));
        }
        Ok(())
    }

    fn set_failed(&mut self, message: &str) -> Result<()> {
        ui::display_error(message);
        Ok(())
    }
}
