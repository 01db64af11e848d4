//! GitHub REST client

use crate::error::{Error, Result};
use crate::platform::PullRequestApi;
use crate::types::PullRequest;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLOSED_PULLS_QUERY: &str = "pulls?state=closed&sort=updated&direction=desc&per_page=100";

/// GitHub service using reqwest
pub struct GitHubClient {
    http_client: Client,
    /// Repository endpoint prefix, ending in `/`
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for the repository at `api_base`
    ///
    /// `api_base` is normally [`RepoInfo::api_base_url`]; tests point it at a
    /// local server.
    ///
    /// [`RepoInfo::api_base_url`]: crate::platform::RepoInfo::api_base_url
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("prlog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            api_base: api_base.into(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// GET `<api_base><path>` and decode the JSON body
    ///
    /// The body is read as text first so a decode failure can report it.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        debug!(%url, "GitHub API request");

        let mut request = self.http_client.get(&url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("can't get response: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::GitHubApi(format!("can't read response: {e}")))?;
        debug!(%status, bytes = body.len(), "GitHub API response");

        serde_json::from_str(&body).map_err(|source| Error::Decode { body, source })
    }
}

#[async_trait]
impl PullRequestApi for GitHubClient {
    async fn commit_pulls(&self, sha: &str) -> Result<Vec<PullRequest>> {
        self.get(&format!("commits/{sha}/pulls")).await
    }

    async fn closed_pulls(&self) -> Result<Vec<PullRequest>> {
        let pulls: Vec<PullRequest> = self.get(CLOSED_PULLS_QUERY).await?;
        debug!(count = pulls.len(), "listed closed PRs");
        Ok(pulls)
    }
}
