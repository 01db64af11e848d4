//! Tag-delta strategy
//!
//! Finds the highest semver tag, lists merge commits between it and the main
//! branch, then resolves each merge to its pull request on GitHub. Bad tags,
//! foreign merge commits and commits without a closed PR are logged and
//! skipped rather than failing the run.

use crate::config::StrategyKind;
use crate::error::Result;
use crate::git::GitRunner;
use crate::history::HistoryStrategy;
use crate::platform::PullRequestApi;
use crate::types::{History, MergeInfo};
use async_trait::async_trait;
use regex::Regex;
use semver::Version;
use std::cmp::Reverse;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

static MERGE_SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge pull request #(\d+)").expect("valid merge subject regex")
});

/// Merge commits since the last release tag, enriched from GitHub
#[derive(Debug, Clone)]
pub struct TagDeltaStrategy {
    main_branch: String,
}

impl TagDeltaStrategy {
    /// Diff against `main_branch`
    pub fn new(main_branch: impl Into<String>) -> Self {
        Self {
            main_branch: main_branch.into(),
        }
    }
}

#[async_trait]
impl HistoryStrategy for TagDeltaStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TagDelta
    }

    async fn collect(&self, git: &dyn GitRunner, api: &dyn PullRequestApi) -> Result<History> {
        let tags = git.tags()?;
        let since_tag = latest_version_tag(&tags).map(String::from);
        match &since_tag {
            Some(tag) => info!(tag = %tag, "last release tag"),
            None => info!("no release tag found, using full branch history"),
        }

        let log = git.merge_log(since_tag.as_deref(), &self.main_branch)?;
        let mut merges = parse_merge_log(&log);

        for merge in &mut merges {
            let pulls = api.commit_pulls(&merge.commit_hash).await?;
            if let Some(pr) = pulls.iter().find(|pr| pr.is_closed()) {
                debug!(commit = %merge.commit_hash, pr_number = pr.number, "resolved PR");
                merge.apply_pull(pr);
            } else {
                warn!(
                    commit = %merge.commit_hash,
                    pr_number = merge.merge_number,
                    "no closed PR found for merge commit"
                );
            }
        }

        merges.sort_by_key(|m| Reverse(m.merge_number));

        Ok(History { since_tag, merges })
    }
}

/// Parse a tag as a semantic version
///
/// Tolerates a leading `v` and missing minor/patch components
/// (`v1.2` is read as `1.2.0`).
pub fn parse_tag_version(tag: &str) -> std::result::Result<Version, semver::Error> {
    let text = tag.strip_prefix('v').unwrap_or(tag);
    let core_end = text.find(['-', '+']).unwrap_or(text.len());
    let (core, suffix) = text.split_at(core_end);
    let padding = match core.matches('.').count() {
        0 => ".0.0",
        1 => ".0",
        _ => "",
    };
    Version::parse(&format!("{core}{padding}{suffix}"))
}

/// The tag with the highest semantic version, as written
///
/// Tags that are not versions are logged and ignored. Among equal versions
/// the first one listed wins.
pub fn latest_version_tag(tags: &[String]) -> Option<&str> {
    let mut latest: Option<(Version, &str)> = None;

    for tag in tags {
        let version = match parse_tag_version(tag) {
            Ok(v) => v,
            Err(e) => {
                warn!(tag = %tag, error = %e, "wrong semver tag, ignoring it");
                continue;
            }
        };
        if latest.as_ref().is_none_or(|(max, _)| version > *max) {
            latest = Some((version, tag.as_str()));
        }
    }

    latest.map(|(_, tag)| tag)
}

/// Parse `git log` output of `hash\tauthor\tsubject` lines into entries
///
/// Only the hash, author and PR number are known at this point; the rest is
/// filled in from GitHub.
pub fn parse_merge_log(log: &str) -> Vec<MergeInfo> {
    let mut merges = Vec::new();

    for line in log.lines().filter(|l| !l.trim().is_empty()) {
        let fields: Vec<&str> = line.split('\t').collect();
        let [hash, author, subject] = fields.as_slice() else {
            warn!(line, fields = fields.len(), "unexpected merge log line, skipping");
            continue;
        };

        let Some(number) = MERGE_SUBJECT
            .captures(subject)
            .and_then(|caps| caps[1].parse::<u64>().ok())
        else {
            warn!(
                commit = %hash,
                subject = %subject,
                "merge commit is not a pull request merge, skipping"
            );
            continue;
        };

        merges.push(MergeInfo {
            commit_hash: (*hash).to_string(),
            user_name: (*author).to_string(),
            merge_number: number,
            ..MergeInfo::default()
        });
    }

    merges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_version_pads_short_versions() {
        assert_eq!(parse_tag_version("v1.2").unwrap(), Version::new(1, 2, 0));
        assert_eq!(parse_tag_version("3").unwrap(), Version::new(3, 0, 0));
    }

    #[test]
    fn test_parse_tag_version_keeps_prerelease() {
        let v = parse_tag_version("v2.0-rc.1").unwrap();
        assert_eq!(v.to_string(), "2.0.0-rc.1");
    }

    #[test]
    fn test_parse_tag_version_rejects_words() {
        assert!(parse_tag_version("not-a-version").is_err());
        assert!(parse_tag_version("").is_err());
    }
}
