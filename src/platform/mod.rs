//! GitHub access
//!
//! Resolves the repository from the local origin remote and queries the
//! REST API for pull requests.

mod detection;
mod github;

pub use detection::{RepoInfo, detect_repo, parse_repo_info};
pub use github::GitHubClient;

use crate::error::Result;
use crate::types::PullRequest;
use async_trait::async_trait;

/// Pull request queries used by the history strategies
#[async_trait]
pub trait PullRequestApi: Send + Sync {
    /// Pull requests associated with a commit (`commits/<sha>/pulls`)
    async fn commit_pulls(&self, sha: &str) -> Result<Vec<PullRequest>>;

    /// The most recently updated closed pull requests, newest first
    async fn closed_pulls(&self) -> Result<Vec<PullRequest>>;
}
