//! prlog - changelog sections from merged GitHub pull requests
//!
//! Reads the local repository's origin remote and (depending on the strategy)
//! its tags and merge commits, asks the GitHub REST API about the matching
//! pull requests, and renders them as a Markdown changelog section.
//!
//! - [`platform`] - origin detection and the GitHub client
//! - [`git`] - the `git` subprocess seam
//! - [`history`] - closed-PR-list and tag-delta strategies
//! - [`changelog`] - title casing, rendering and the [`changelog::generate`] pipeline

pub mod changelog;
pub mod config;
pub mod error;
pub mod git;
pub mod history;
pub mod platform;
pub mod types;
