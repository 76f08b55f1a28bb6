//! Download statistics of the latest release.

use anyhow::Result;
use log::{debug, info};

use crate::github::{GitHubRepo, Release, ReleaseAsset, ReleaseSource};

/// Auto-update metadata attached to every release; not a real download.
pub const EXCLUDED_ASSET: &str = "latest.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseStats {
    pub total_downloads: u64,
    pub tag_name: String,
    /// Every asset of the release, [`EXCLUDED_ASSET`] included.
    pub assets: Vec<ReleaseAsset>,
}

/// Sum of download counts over all assets except [`EXCLUDED_ASSET`].
pub fn total_downloads(release: &Release) -> u64 {
    release
        .assets
        .iter()
        .filter(|asset| asset.name != EXCLUDED_ASSET)
        .map(|asset| asset.download_count)
        .sum()
}

/// One `name: N downloads` line per asset, in API order.
pub fn asset_summaries(assets: &[ReleaseAsset]) -> Vec<String> {
    assets
        .iter()
        .map(|asset| format!("{}: {} downloads", asset.name, asset.download_count))
        .collect()
}

/// Fetch the latest release of `repo` and count its downloads.
#[tracing::instrument(skip(source))]
pub async fn fetch_release_stats<S: ReleaseSource>(
    source: &S,
    repo: &GitHubRepo,
) -> Result<ReleaseStats> {
    let release = source.latest_release(repo).await?;
    Ok(summarize(&release))
}

/// Totals for an already fetched release.
pub fn summarize(release: &Release) -> ReleaseStats {
    for line in asset_summaries(&release.assets) {
        debug!("{}", line);
    }

    let stats = ReleaseStats {
        total_downloads: total_downloads(release),
        tag_name: release.tag_name.clone(),
        assets: release.assets.clone(),
    };
    info!(
        "Release {} has {} downloads across {} assets",
        stats.tag_name,
        stats.total_downloads,
        stats.assets.len()
    );
    stats
}
