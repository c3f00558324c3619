use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Target used in the default filter directive
const LOG_TARGET: &str = "version_bump";

/// Map `-v` occurrences to a default level: none -> warn, `-v` -> info, `-vv` -> debug
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr. `RUST_LOG` takes precedence over the level derived from
/// the verbosity flag.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbosity);
    let directive = format!("{}={}", LOG_TARGET, level.as_str().to_lowercase());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
