//! Error types for prlog

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that abort a changelog run
///
/// Recoverable problems (unparseable tags, foreign merge commits, commits
/// without a closed PR) are logged and never surface as an `Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// git exited with a non-zero status
    #[error("{command} failed ({status}): {stderr}")]
    Git {
        /// Command line that was run
        command: String,
        /// Exit status reported by the process
        status: ExitStatus,
        /// Captured standard error
        stderr: String,
    },

    /// git could not be started at all
    #[error("can't run git: {0}")]
    Io(#[from] std::io::Error),

    /// The origin remote URL could not be turned into `owner/repo`
    #[error("invalid remote url: {0}")]
    InvalidRemoteUrl(String),

    /// The origin remote is not hosted on github.com
    #[error("only github.com repos are supported, got host {0:?}")]
    UnsupportedHost(String),

    /// HTTP transport failure talking to the GitHub API
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// A GitHub API response did not match the expected shape
    #[error("can't parse response {body:?}: {source}")]
    Decode {
        /// Raw response body
        body: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Writing the changelog section failed
    #[error("can't build changelog: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
