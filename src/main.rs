mod config;
mod github;
mod http;
mod logger;
mod release_note;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Config};
use github::github_client::GithubClient;
use itertools::Itertools;
use release_note::{extractor::ReleaseNoteExtractor, matcher::Matcher, walker};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.debug)?;

    let config = Config::load(cli).await.context("Invalid configuration")?;
    log::debug!("inspecting {} as {}", config.repository, config.user);

    let client = GithubClient::new(
        &config.api_url,
        &config.user,
        &config.token,
        config.repositories_page_size,
    );

    let repository = github::resolve_repository(&client, &config.repository)
        .await
        .with_context(|| format!("Cannot resolve repository {}", config.repository))?;

    let merge_commits = walker::walk(
        &client,
        &repository,
        &config.branch,
        &config.from,
        &config.to,
    )
    .await
    .with_context(|| format!("Cannot walk the history of {}", config.branch))?;
    log::debug!("{} merge commits in range", merge_commits.len());

    let extractor = ReleaseNoteExtractor::new(config.template);
    let mut matcher = Matcher::new(
        &client,
        &repository,
        merge_commits,
        &extractor,
        config.page_size,
    );

    while let Some(note) = matcher
        .next_note()
        .await
        .context("Cannot list pull requests")?
    {
        println!("{}", note);
    }

    if !matcher.remaining().is_empty() {
        log::debug!(
            "no pull request found for: {}",
            matcher.remaining().iter().join(", ")
        );
    }

    Ok(())
}
