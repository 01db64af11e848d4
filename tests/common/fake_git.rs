//! In-memory git for testing

#![allow(dead_code)]

use prlog::error::{Error, Result};
use prlog::git::GitRunner;
use std::collections::HashMap;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::Mutex;

/// Answers git command lines from a table of canned outputs
///
/// Unknown command lines fail like git exiting with status 1.
#[derive(Default)]
pub struct FakeGit {
    outputs: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeGit {
    /// Create a fake with no canned outputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `git <command>` with `stdout`
    #[must_use]
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), stdout.to_string());
        self
    }

    /// Set the `origin` remote URL
    #[must_use]
    pub fn with_origin(self, url: &str) -> Self {
        self.with_output("config --get remote.origin.url", &format!("{url}\n"))
    }

    /// Set the tag listing
    #[must_use]
    pub fn with_tags(self, tags: &[&str]) -> Self {
        let listing: String = tags.iter().map(|t| format!("{t}\n")).collect();
        self.with_output("tag", &listing)
    }

    /// Set the merge log for `range`
    #[must_use]
    pub fn with_merge_log(self, range: &str, log: &str) -> Self {
        self.with_output(
            &format!("log --merges --pretty=format:%H%x09%an%x09%s {range}"),
            log,
        )
    }

    /// Command lines run so far, without the leading `git`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        self.calls.lock().unwrap().push(command.clone());

        self.outputs.get(&command).cloned().ok_or_else(|| Error::Git {
            command: format!("git {command}"),
            status: ExitStatus::from_raw(1 << 8),
            stderr: format!("fatal: no canned output for `{command}`"),
        })
    }
}
