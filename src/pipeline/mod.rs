//! Pipeline host abstraction
//!
//! The version computation itself is pure; this module is the boundary where its
//! result leaves the process. The primary abstraction is the [OutputSink] trait:
//!
//! - [github::GithubOutputFile]: appends to the file named by `GITHUB_OUTPUT`
//! - [github::StdoutSink]: prints `name=value` lines, for local runs (suppressed under `--json`)
//! - [mock::MockSink]: records everything in memory for tests

pub mod github;
pub mod mock;

pub use github::{GithubOutputFile, StdoutSink};
pub use mock::MockSink;

use crate::error::Result;
use crate::version::Outputs;

/// Output names written for every successful run
pub const OUTPUT_NEW_VERSION: &str = "new_version";
pub const OUTPUT_NEW_VERSION_RAW: &str = "new_version_raw";
pub const OUTPUT_PREFIX: &str = "prefix";

/// Destination for step outputs and the failure signal
pub trait OutputSink {
    /// Publish a single named output
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Publish several outputs.
    ///
    /// Implementations backed by a file should write them in one go so a failed write
    /// does not leave a partial set behind.
    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> Result<()> {
        for (name, value) in outputs {
            self.set_output(name, value)?;
        }
        Ok(())
    }

    /// Mark the step as failed with a diagnostic message
    fn set_failed(&mut self, message: &str) -> Result<()>;
}

/// Write the step outputs for a computed version
pub fn emit_outputs(sink: &mut dyn OutputSink, outputs: &Outputs) -> Result<()> {
    sink.set_outputs(&[
        (OUTPUT_NEW_VERSION, outputs.new_version.as_str()),
        (OUTPUT_NEW_VERSION_RAW, outputs.new_version_raw.as_str()),
        (OUTPUT_PREFIX, outputs.prefix.as_str()),
    ])
}
