//! Run configuration

use clap::ValueEnum;

/// How the list of merged pull requests is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    /// Most recently updated closed PRs, straight from the API
    #[default]
    ClosedPrs,
    /// Merge commits since the highest semver tag, enriched via the API
    TagDelta,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClosedPrs => write!(f, "closed-prs"),
            Self::TagDelta => write!(f, "tag-delta"),
        }
    }
}

/// Settings for a single run, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Token sent as `Authorization: token <token>`
    pub github_token: Option<String>,
    /// Branch the tag-delta strategy diffs against
    pub main_branch: String,
    /// Selected history strategy
    pub strategy: StrategyKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            main_branch: "main".to_string(),
            strategy: StrategyKind::default(),
        }
    }
}
