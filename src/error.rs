use thiserror::Error;

/// Unified error type for version-determiner operations
#[derive(Error, Debug)]
pub enum VersionDeterminerError {
    #[error("First arg has to be `release-version`, `version-tag` or `snapshot-version` (got '{0}')")]
    InvalidMode(String),

    #[error("Second arg has to be `MAJOR`, `MINOR` or `PATCH` (got '{0}')")]
    InvalidReleaseType(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Version source failed: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-determiner
pub type Result<T> = std::result::Result<T, VersionDeterminerError>;

impl VersionDeterminerError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionDeterminerError::Version(msg.into())
    }

    /// Create a version source error with context
    pub fn source_failed(msg: impl Into<String>) -> Self {
        VersionDeterminerError::Source(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionDeterminerError::Config(msg.into())
    }

    /// True for errors caused by bad command-line arguments.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            VersionDeterminerError::InvalidMode(_) | VersionDeterminerError::InvalidReleaseType(_)
        )
    }
}
