use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssuesError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Errors carried by the final state of a one-shot command.
    #[error("{}", messages.join(" "))]
    Reported { messages: Vec<String> },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No GitHub token found. Set GITHUB_TOKEN env var or add token to the gh-issues config.toml"
    )]
    MissingToken,

    #[error("Invalid repository path '{0}', expected owner/name")]
    InvalidPath(String),

    #[error("No repository loaded")]
    NoRepository,

    #[error("A search is still loading")]
    SearchInFlight,
}

pub type Result<T> = std::result::Result<T, IssuesError>;
