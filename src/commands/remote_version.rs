use anyhow::Result;
use log::warn;

use crate::config::{Config, ConfigOptions};
use crate::github::{GitHubRepo, ReleaseSource};
use crate::version;

/// Where the published version marker lives.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteVersionOptions {
    pub repo: GitHubRepo,
    pub branch: String,
    pub remote_path: String,
    pub key: String,
}

/// Print the version marker of the published file, or an empty line.
#[tracing::instrument(skip(config))]
pub async fn remote_version(config: ConfigOptions, options: RemoteVersionOptions) -> Result<()> {
    let config = Config::new(config)?;
    let output = run(&config.github, &options).await?;
    println!("{}", output);
    Ok(())
}

pub(crate) async fn run<S: ReleaseSource>(
    source: &S,
    options: &RemoteVersionOptions,
) -> Result<String> {
    let version = version::fetch_remote_version(
        source,
        &options.repo,
        &options.branch,
        &options.remote_path,
        &options.key,
    )
    .await?;

    if version.is_none() {
        warn!(
            "No '{}' entry in {}/{} on {}",
            options.key, options.repo, options.remote_path, options.branch
        );
    }
    Ok(version.unwrap_or_default())
}
