//! In-memory stand-in for the GitHub pull request endpoints
//!
//! Shared by the unit test modules; each one uses a different subset.

#![allow(dead_code)]

use async_trait::async_trait;
use prlog::error::{Error, Result};
use prlog::platform::PullRequestApi;
use prlog::types::{PullRequest, PullRequestAuthor};
use std::collections::HashMap;
use std::sync::Mutex;

/// Simple mock pull request API
///
/// Features:
/// - Configurable responses per commit SHA
/// - A fixed closed-PR listing
/// - Call tracking for verification
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockPullRequestApi {
    commit_pulls_responses: Mutex<HashMap<String, Vec<PullRequest>>>,
    closed_pulls_response: Mutex<Vec<PullRequest>>,
    // Call tracking
    commit_pulls_calls: Mutex<Vec<String>>,
    closed_pulls_calls: Mutex<usize>,
    // Error injection
    error_on_commit_pulls: Mutex<Option<String>>,
}

impl MockPullRequestApi {
    /// Create an empty mock: every commit has no PRs, the listing is empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PRs returned for a commit
    pub fn set_commit_pulls(&self, sha: &str, pulls: Vec<PullRequest>) {
        self.commit_pulls_responses
            .lock()
            .unwrap()
            .insert(sha.to_string(), pulls);
    }

    /// Set the closed-PR listing
    pub fn set_closed_pulls(&self, pulls: Vec<PullRequest>) {
        *self.closed_pulls_response.lock().unwrap() = pulls;
    }

    /// Make `commit_pulls` fail the way an undecodable body does
    pub fn fail_commit_pulls(&self, body: &str) {
        *self.error_on_commit_pulls.lock().unwrap() = Some(body.to_string());
    }

    /// SHAs passed to `commit_pulls`, in call order
    pub fn commit_pulls_calls(&self) -> Vec<String> {
        self.commit_pulls_calls.lock().unwrap().clone()
    }

    /// Number of `closed_pulls` calls
    pub fn closed_pulls_calls(&self) -> usize {
        *self.closed_pulls_calls.lock().unwrap()
    }
}

#[async_trait]
impl PullRequestApi for MockPullRequestApi {
    async fn commit_pulls(&self, sha: &str) -> Result<Vec<PullRequest>> {
        self.commit_pulls_calls
            .lock()
            .unwrap()
            .push(sha.to_string());

        if let Some(body) = self.error_on_commit_pulls.lock().unwrap().clone() {
            let source = serde_json::from_str::<Vec<PullRequest>>(&body).unwrap_err();
            return Err(Error::Decode { body, source });
        }

        Ok(self
            .commit_pulls_responses
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .unwrap_or_default())
    }

    async fn closed_pulls(&self) -> Result<Vec<PullRequest>> {
        *self.closed_pulls_calls.lock().unwrap() += 1;
        Ok(self.closed_pulls_response.lock().unwrap().clone())
    }
}

/// Build a pull request with the given state and merge timestamp
pub fn make_pr(
    number: u64,
    title: &str,
    login: &str,
    state: &str,
    merged_at: Option<&str>,
) -> PullRequest {
    PullRequest {
        number,
        html_url: format!("https://github.com/org/repo/pull/{number}"),
        state: state.to_string(),
        title: title.to_string(),
        user: PullRequestAuthor {
            login: login.to_string(),
            html_url: format!("https://github.com/{login}"),
        },
        merge_commit_sha: Some(format!("sha{number}")),
        merged_at: merged_at.map(String::from),
    }
}

/// A merged, closed pull request
pub fn closed_pr(number: u64, title: &str, login: &str) -> PullRequest {
    make_pr(number, title, login, "closed", Some("2024-03-01T12:00:00Z"))
}

/// An open pull request
pub fn open_pr(number: u64, title: &str, login: &str) -> PullRequest {
    make_pr(number, title, login, "open", None)
}
