pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod pipeline;
pub mod ui;
pub mod version;

pub use error::{Result, VersionBumpError};
pub use inputs::{validate_inputs, Inputs, PartialInputs};
pub use version::{increment_branch_version, increment_main_version, update_version, Outputs};
