//! Command-line entry support

pub mod orchestration;

pub use orchestration::{compute, run_step, run_workflow, WorkflowArgs, WorkflowResult};
