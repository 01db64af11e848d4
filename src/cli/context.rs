//! Shared setup for a changelog run

use prlog::config::Config;
use prlog::error::Result;
use prlog::git::GitCli;
use prlog::history::{HistoryStrategy, create_strategy};
use prlog::platform::{GitHubClient, RepoInfo, detect_repo};

/// Everything a run needs, resolved once from the [`Config`]
///
/// - Opening git in the current directory
/// - Resolving the GitHub repository from `origin`
/// - Creating the API client and the selected strategy
pub struct GenerateContext {
    /// Local git access
    pub git: GitCli,
    /// Repository behind the origin remote
    pub repo: RepoInfo,
    /// GitHub API client for that repository
    pub api: GitHubClient,
    /// Selected history strategy
    pub strategy: Box<dyn HistoryStrategy>,
}

impl GenerateContext {
    /// Build the context for `config`
    pub fn new(config: &Config) -> Result<Self> {
        let git = GitCli::new();
        let repo = detect_repo(&git)?;
        let api = GitHubClient::new(repo.api_base_url(), config.github_token.clone())?;
        let strategy = create_strategy(config);

        Ok(Self {
            git,
            repo,
            api,
            strategy,
        })
    }
}
