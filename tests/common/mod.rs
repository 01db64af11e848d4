//! Shared test fixtures

mod fake_git;
mod mock_api;

pub use fake_git::FakeGit;
pub use mock_api::{MockPullRequestApi, closed_pr, make_pr, open_pr};
