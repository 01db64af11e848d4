//! Changelog generation
//!
//! Runs a history strategy and renders its entries as a Markdown section.

mod format;

pub use format::{NEW_TAG_PLACEHOLDER, render_section, title_case};

use crate::error::Result;
use crate::git::GitRunner;
use crate::history::HistoryStrategy;
use crate::platform::PullRequestApi;
use chrono::NaiveDate;
use tracing::info;

/// Collect merged pull requests and render the changelog section
///
/// Every call is awaited in turn: git first, then one API request at a time.
pub async fn generate(
    strategy: &dyn HistoryStrategy,
    git: &dyn GitRunner,
    api: &dyn PullRequestApi,
    today: NaiveDate,
) -> Result<String> {
    let history = strategy.collect(git, api).await?;
    info!(
        strategy = %strategy.kind(),
        since_tag = history.since_tag.as_deref().unwrap_or("unknown"),
        entries = history.merges.len(),
        "collected merged pull requests"
    );

    render_section(&history.merges, today)
}
