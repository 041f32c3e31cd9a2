//! Custom error types for mergetag with improved type safety and error handling.

use thiserror::Error;

/// Main error type for mergetag operations.
#[derive(Error, Debug)]
pub enum MergetagError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Label policy errors
    #[error(
        "Pull request #{pr_number} has no release label: exactly one of patch, minor, major, or no-release is required"
    )]
    MissingReleaseLabel { pr_number: u64 },

    #[error(
        "Pull request #{pr_number} has multiple release labels ({}): exactly one is required",
        .labels.join(", ")
    )]
    AmbiguousReleaseLabel {
        pr_number: u64,
        labels: Vec<String>,
    },

    // Commit resolution errors
    #[error("No pull request is associated with commit {sha}")]
    NoAssociatedPullRequest { sha: String },

    #[error(
        "Found {count} pull requests associated with commit {sha}: expected exactly one"
    )]
    AmbiguousAssociatedPullRequest { sha: String, count: usize },

    // Version errors
    #[error("Cannot compute version increment: {0}")]
    IncrementFailure(String),

    #[error("Invalid version format: {0}")]
    InvalidVersion(#[from] semver::Error),

    // Forge/publication errors
    #[error("Tag {tag} already exists")]
    TagConflict { tag: String },

    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    // Parsing errors - automatic conversions via #[from]
    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using MergetagError
pub type Result<T> = std::result::Result<T, MergetagError>;

impl MergetagError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for MergetagError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for MergetagError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => {
                if source.message.contains("rate limit") {
                    Self::RateLimitExceeded
                } else if matches!(source.status_code.as_u16(), 401 | 403) {
                    Self::AuthenticationError(source.message.clone())
                } else {
                    Self::ForgeError(format!("GitHub API error: {}", err))
                }
            }
            // Anything below the API surface is a transport problem
            _ => Self::NetworkError(err.to_string()),
        }
    }
}
