//! History strategies
//!
//! A strategy decides which merged pull requests belong in the changelog:
//! - [`ClosedPrsStrategy`] lists recently closed PRs straight from GitHub
//! - [`TagDeltaStrategy`] walks merge commits since the last release tag and
//!   looks each one up on GitHub

mod closed_prs;
mod tag_delta;

pub use closed_prs::ClosedPrsStrategy;
pub use tag_delta::{TagDeltaStrategy, latest_version_tag, parse_merge_log, parse_tag_version};

use crate::config::{Config, StrategyKind};
use crate::error::Result;
use crate::git::GitRunner;
use crate::platform::PullRequestApi;
use crate::types::History;
use async_trait::async_trait;

/// Source of changelog entries
#[async_trait]
pub trait HistoryStrategy: Send + Sync {
    /// Which strategy this is
    fn kind(&self) -> StrategyKind;

    /// Gather merged pull requests, already in render order
    async fn collect(&self, git: &dyn GitRunner, api: &dyn PullRequestApi) -> Result<History>;
}

/// Create the strategy selected in `config`
pub fn create_strategy(config: &Config) -> Box<dyn HistoryStrategy> {
    match config.strategy {
        StrategyKind::ClosedPrs => Box::new(ClosedPrsStrategy),
        StrategyKind::TagDelta => Box::new(TagDeltaStrategy::new(config.main_branch.clone())),
    }
}
