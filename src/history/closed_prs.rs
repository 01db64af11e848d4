//! Closed-PR-list strategy

use crate::config::StrategyKind;
use crate::error::Result;
use crate::git::GitRunner;
use crate::history::HistoryStrategy;
use crate::platform::PullRequestApi;
use crate::types::{History, MergeInfo};
use async_trait::async_trait;
use tracing::debug;

/// Lists the most recently updated closed PRs and keeps the merged ones
///
/// Local history is not consulted; entries keep the API's order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedPrsStrategy;

#[async_trait]
impl HistoryStrategy for ClosedPrsStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ClosedPrs
    }

    async fn collect(&self, _git: &dyn GitRunner, api: &dyn PullRequestApi) -> Result<History> {
        let pulls = api.closed_pulls().await?;

        let merges = pulls
            .iter()
            .filter(|pr| {
                let merged = pr.is_merged();
                if !merged {
                    debug!(pr_number = pr.number, "skipping PR closed without merge");
                }
                merged
            })
            .map(MergeInfo::from_pull)
            .collect();

        Ok(History {
            since_tag: None,
            merges,
        })
    }
}
