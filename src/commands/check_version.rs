use anyhow::Result;
use log::{info, warn};

use crate::config::{Config, ConfigOptions};
use crate::github::ReleaseSource;
use crate::runtime::Runtime;
use crate::version::{self, VersionCheck, VersionCheckOptions};

/// Print the remote version if it differs from the local one, or an empty line.
#[tracing::instrument(skip(runtime, config))]
pub async fn check_version<R: Runtime>(
    runtime: R,
    config: ConfigOptions,
    options: VersionCheckOptions,
) -> Result<()> {
    let config = Config::new(config)?;
    let output = run(&runtime, &config.github, &options).await?;
    println!("{}", output);
    Ok(())
}

pub(crate) async fn run<R: Runtime, S: ReleaseSource>(
    runtime: &R,
    source: &S,
    options: &VersionCheckOptions,
) -> Result<String> {
    let check = version::check_version(runtime, source, options).await?;
    match &check {
        VersionCheck::Changed(remote) => info!("{} changed to {}", options.key, remote),
        VersionCheck::Unchanged => info!("{} is up to date", options.key),
        VersionCheck::MissingRemote => warn!(
            "No '{}' entry in {}/{} on {}",
            options.key, options.repo, options.remote_path, options.branch
        ),
    }
    Ok(check.into_output())
}
