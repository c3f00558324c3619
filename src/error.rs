use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum VersionBumpError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Unknown version strategy type: {0}")]
    UnknownStrategy(String),

    #[error("Version component overflow: {0}")]
    VersionOverflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, VersionBumpError>;

impl VersionBumpError {
    /// Create an invalid version format error carrying the offending string
    pub fn invalid_version(version: impl Into<String>) -> Self {
        VersionBumpError::InvalidVersionFormat(version.into())
    }

    /// Create an unknown strategy error
    pub fn unknown_strategy(strategy: impl Into<String>) -> Self {
        VersionBumpError::UnknownStrategy(strategy.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionBumpError::Config(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        VersionBumpError::Output(msg.into())
    }
}
