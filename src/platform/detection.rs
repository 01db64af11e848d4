//! Repository detection from the origin remote URL

use crate::error::{Error, Result};
use crate::git::GitRunner;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;
use url::Url;

const GITHUB_HOST: &str = "github.com";
const GITHUB_API_REPOS: &str = "https://api.github.com/repos";

/// scp-like SSH remotes (`git@host:org/repo.git`) are not valid URLs
static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@([^:]+):([^/]+)/([^/]+?)(?:\.git)?$").expect("valid SSH remote regex")
});

/// A GitHub repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoInfo {
    /// Base URL for repository endpoints, with a trailing slash
    pub fn api_base_url(&self) -> String {
        format!("{GITHUB_API_REPOS}/{}/{}/", self.owner, self.repo)
    }
}

/// Parse a remote URL into a GitHub repository
///
/// Accepts `https://`, `ssh://`, `git://` and scp-like `git@host:org/repo`
/// forms, with or without a `.git` suffix.
pub fn parse_repo_info(remote_url: &str) -> Result<RepoInfo> {
    let remote_url = remote_url.trim();
    let normalized = SSH_REMOTE.captures(remote_url).map_or_else(
        || remote_url.to_string(),
        |caps| format!("git://{}/{}/{}", &caps[1], &caps[2], &caps[3]),
    );

    let parsed = Url::parse(&normalized)
        .map_err(|e| Error::InvalidRemoteUrl(format!("{remote_url}: {e}")))?;

    let host = parsed.host_str().unwrap_or_default();
    if host != GITHUB_HOST {
        return Err(Error::UnsupportedHost(host.to_string()));
    }

    let path = parsed.path().trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [owner, repo] => Ok(RepoInfo {
            owner: (*owner).to_string(),
            repo: (*repo).to_string(),
        }),
        _ => Err(Error::InvalidRemoteUrl(format!(
            "{remote_url}: wrong repo name"
        ))),
    }
}

/// Resolve the GitHub repository behind the `origin` remote
pub fn detect_repo(git: &dyn GitRunner) -> Result<RepoInfo> {
    let origin = git.origin_url()?;
    let repo = parse_repo_info(&origin)?;
    info!(api_url = %repo.api_base_url(), "resolved GitHub repository");
    Ok(repo)
}
