use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};

use version_bump::cli::{run_step, WorkflowArgs};
use version_bump::pipeline::{GithubOutputFile, OutputSink, StdoutSink};
use version_bump::{logging, ui, PartialInputs};

#[derive(clap::Parser)]
#[command(
    name = "version-bump",
    version,
    about = "Compute the next mainline or branch version for a CI pipeline step"
)]
struct Args {
    #[arg(long, env = "INPUT_LATEST_MAIN_VERSION", help = "Latest version on a mainline branch")]
    latest_main_version: Option<String>,

    #[arg(long, env = "INPUT_LATEST_BRANCH_VERSION", help = "Latest version built on this branch")]
    latest_branch_version: Option<String>,

    #[arg(short, long, env = "INPUT_BRANCH_NAME", help = "Branch being built")]
    branch_name: Option<String>,

    #[arg(
        short = 's',
        long = "strategy",
        env = "INPUT_VERSION_STRATEGY",
        help = "Bump strategy for mainline branches: patch, minor or major"
    )]
    version_strategy: Option<String>,

    #[arg(short = 'p', long, env = "INPUT_VERSION_PREFIX", help = "Prefix for the new version, e.g. 'v'")]
    version_prefix: Option<String>,

    #[arg(short, long, env = "INPUT_ADDITIONAL_NAME", help = "Qualifier such as a component name")]
    additional_name: Option<String>,

    #[arg(
        short,
        long,
        env = "INPUT_MAINLINE_VERSIONING_BRANCHES",
        help = "Comma-separated branches that get mainline versions"
    )]
    mainline_versioning_branches: Option<String>,

    #[arg(short, long, env = "VERSION_BUMP_CONFIG", help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, env = "GITHUB_OUTPUT", help = "File step outputs are appended to")]
    output_file: Option<String>,

    #[arg(long, help = "Print the full result as JSON on stdout")]
    json: bool,

    #[arg(short, long, help = "Do not print the human-readable summary")]
    quiet: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,
}

/// Treat empty strings (e.g. an unset `GITHUB_OUTPUT`) as absent
fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

impl Args {
    fn into_parts(self) -> (WorkflowArgs, Option<PathBuf>) {
        let workflow_args = WorkflowArgs {
            inputs: PartialInputs {
                latest_main_version: self.latest_main_version,
                latest_branch_version: self.latest_branch_version,
                branch_name: self.branch_name,
                strategy: self.version_strategy,
                version_prefix: self.version_prefix,
                additional_name: self.additional_name,
                mainline_versioning_branches: self.mainline_versioning_branches,
            },
            config_path: non_empty_path(self.config),
        };
        (workflow_args, non_empty_path(self.output_file))
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init_logging(args.verbose)?;

    let json = args.json;
    let quiet = args.quiet;
    let (workflow_args, output_file) = args.into_parts();

    let mut sink: Box<dyn OutputSink> = match output_file {
        Some(path) => Box::new(GithubOutputFile::new(path)),
        None if json => Box::new(StdoutSink::failures_only()),
        None => Box::new(StdoutSink::new()),
    };

    let Some(result) = run_step(&workflow_args, sink.as_mut())? else {
        return Ok(ExitCode::FAILURE);
    };

    if !quiet {
        ui::display_inputs(&result.inputs);
        for warning in &result.warnings {
            ui::display_boundary_warning(warning);
        }
        ui::display_outputs(&result.outputs);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result.outputs)?);
    }

    Ok(ExitCode::SUCCESS)
}
