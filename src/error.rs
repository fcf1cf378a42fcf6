use thiserror::Error;

/// Unified error type for release-check operations
#[derive(Error, Debug)]
pub enum ReleaseCheckError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-check
pub type Result<T> = std::result::Result<T, ReleaseCheckError>;

impl ReleaseCheckError {
    /// Create a version parsing error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseCheckError::Version(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseCheckError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseCheckError::Config(msg.into())
    }

    /// Create a download error with context
    pub fn download(msg: impl Into<String>) -> Self {
        ReleaseCheckError::Download(msg.into())
    }
}
