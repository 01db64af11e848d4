//! Core types for prlog

use crate::changelog::title_case;
use serde::{Deserialize, Deserializer};

/// A merged pull request as it appears in the changelog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeInfo {
    /// Merge commit SHA
    pub commit_hash: String,
    /// Author display name (GitHub login once enriched)
    pub user_name: String,
    /// Author profile URL
    pub user_profile_url: String,
    /// Pull request number
    pub merge_number: u64,
    /// Pull request web URL
    pub merge_url: String,
    /// Pull request title, title-cased
    pub title: String,
}

impl MergeInfo {
    /// Build an entry straight from a pull request
    pub fn from_pull(pr: &PullRequest) -> Self {
        Self {
            commit_hash: pr.merge_commit_sha.clone().unwrap_or_default(),
            user_name: pr.user.login.clone(),
            user_profile_url: pr.user.html_url.clone(),
            merge_number: pr.number,
            merge_url: pr.html_url.clone(),
            title: title_case(&pr.title),
        }
    }

    /// Overwrite the PR-derived fields with data from the API
    ///
    /// The commit hash is kept: it identifies the merge in local history.
    pub fn apply_pull(&mut self, pr: &PullRequest) {
        self.merge_number = pr.number;
        self.merge_url.clone_from(&pr.html_url);
        self.title = title_case(&pr.title);
        self.user_name.clone_from(&pr.user.login);
        self.user_profile_url.clone_from(&pr.user.html_url);
    }
}

impl std::fmt::Display for MergeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "* {}. [#{}]({}) ([{}]({}))",
            self.title, self.merge_number, self.merge_url, self.user_name, self.user_profile_url
        )
    }
}

/// A pull request as returned by the GitHub REST API
///
/// Only the fields prlog reads are named; a response missing any of the
/// required ones fails to decode.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// `open` or `closed`
    pub state: String,
    /// PR title
    pub title: String,
    /// PR author; empty for deleted accounts, which GitHub reports as null
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: PullRequestAuthor,
    /// SHA of the merge commit, if GitHub computed one
    #[serde(default)]
    pub merge_commit_sha: Option<String>,
    /// Merge timestamp; null for PRs closed without merging
    #[serde(default)]
    pub merged_at: Option<String>,
}

impl PullRequest {
    /// Whether the PR is closed (merged or not)
    pub fn is_closed(&self) -> bool {
        self.state == "closed"
    }

    /// Whether the PR carries a non-empty merge timestamp
    pub fn is_merged(&self) -> bool {
        self.merged_at.as_deref().is_some_and(|at| !at.is_empty())
    }
}

/// Author of a pull request
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PullRequestAuthor {
    /// GitHub login
    pub login: String,
    /// Profile URL
    pub html_url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Output of a history strategy
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Release tag the history starts after, if one was used
    pub since_tag: Option<String>,
    /// Entries in the order they should be rendered
    pub merges: Vec<MergeInfo>,
}
