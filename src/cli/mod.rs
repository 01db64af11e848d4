//! Command-line interface

mod context;
mod generate;

pub use generate::run_generate;

use clap::Parser;
use prlog::config::{Config, StrategyKind};

/// Generate a changelog section from merged GitHub pull requests
#[derive(Debug, Parser)]
#[command(name = "prlog", version, about)]
pub struct Cli {
    /// OAuth2 token for GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Name of the main branch (main, master, ...)
    #[arg(long, default_value = "main")]
    pub main_branch: String,

    /// How merged pull requests are found
    #[arg(long, value_enum, default_value_t = StrategyKind::ClosedPrs)]
    pub strategy: StrategyKind,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Freeze the parsed arguments into the run configuration
    pub fn into_config(self) -> Config {
        Config {
            github_token: self.github_token,
            main_branch: self.main_branch,
            strategy: self.strategy,
        }
    }
}
