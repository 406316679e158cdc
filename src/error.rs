//! Error types for mr-changelog

use thiserror::Error;

/// Errors that can occur while generating a changelog
#[derive(Debug, Error)]
pub enum Error {
    /// `GITLAB_PRIVATE_TOKEN` is missing or empty
    #[error("GITLAB_PRIVATE_TOKEN is not set; export a GitLab access token first")]
    MissingToken,

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// git subprocess failed
    #[error("git error: {0}")]
    Git(String),

    /// GitLab API returned an unsuccessful response
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// HTTP transport or response decoding failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid regular expression
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// A missing token exits with 1; every other fatal error exits with 2.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingToken => 1,
            _ => 2,
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
