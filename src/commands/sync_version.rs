use anyhow::Result;
use log::warn;

use crate::config::{Config, ConfigOptions};
use crate::github::ReleaseSource;
use crate::runtime::Runtime;
use crate::version::{self, VersionCheckOptions};

/// Overwrite the local version file with the published one and print its version.
#[tracing::instrument(skip(runtime, config))]
pub async fn sync_version<R: Runtime>(
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
    let version = version::sync_version(runtime, source, options).await?;
    if version.is_none() {
        warn!(
            "Copied {} has no '{}' entry",
            options.local_path.display(),
            options.key
        );
    }
    Ok(version.unwrap_or_default())
}
