//! Generate command - print a changelog section to stdout

use crate::cli::context::GenerateContext;
use anstream::println;
use chrono::Local;
use prlog::changelog::generate;
use prlog::config::Config;
use prlog::error::Result;
use tracing::debug;

/// Run the whole pipeline and print the section
pub async fn run_generate(config: &Config) -> Result<()> {
    let ctx = GenerateContext::new(config)?;
    debug!(
        owner = %ctx.repo.owner,
        repo = %ctx.repo.repo,
        strategy = %ctx.strategy.kind(),
        "starting changelog run"
    );

    let today = Local::now().date_naive();
    let section = generate(ctx.strategy.as_ref(), &ctx.git, &ctx.api, today).await?;

    println!("{section}");
    Ok(())
}
