// Common error types for verstring

/// Errors produced while parsing versions or loading version configuration
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// Base version does not match `major.minor.patch[-suffix]`
    #[error("Invalid base version \"{0}\", should contain at least 3 version digits")]
    InvalidVersionFormat(String),

    /// Configuration file is missing or malformed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VersionError {
    /// Process exit code used by the command line front-end
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidVersionFormat(_) => 2,
            Self::ConfigError(_) | Self::IoError(_) | Self::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
