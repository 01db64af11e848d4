//! Local git access via the `git` binary

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs git subcommands and returns their standard output
///
/// The query helpers are provided on top of [`run`] so tests can swap in a
/// fake that only answers raw command lines.
///
/// [`run`]: Self::run
pub trait GitRunner: Send + Sync {
    /// Run `git <args>`, returning stdout on success
    fn run(&self, args: &[&str]) -> Result<String>;

    /// URL configured for the `origin` remote
    fn origin_url(&self) -> Result<String> {
        let out = self.run(&["config", "--get", "remote.origin.url"])?;
        Ok(out.trim().to_string())
    }

    /// All tag names, in the order git lists them
    fn tags(&self) -> Result<Vec<String>> {
        let out = self.run(&["tag"])?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    /// Merge commits on `branch` after `since`, one `hash\tauthor\tsubject` per line
    ///
    /// With no `since` tag the whole branch history is listed.
    fn merge_log(&self, since: Option<&str>, branch: &str) -> Result<String> {
        let range = since.map_or_else(|| branch.to_string(), |tag| format!("{tag}..{branch}"));
        self.run(&[
            "log",
            "--merges",
            "--pretty=format:%H%x09%an%x09%s",
            range.as_str(),
        ])
    }
}

/// [`GitRunner`] backed by the `git` executable
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }
}

impl GitRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!("# {command}");

        let mut cmd = Command::new("git");
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(Error::Git {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
