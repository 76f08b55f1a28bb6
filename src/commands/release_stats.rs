use anyhow::Result;
use std::path::PathBuf;

use crate::config::{Config, ConfigOptions};
use crate::github::{GitHubRepo, ReleaseSource};
use crate::readme::{self, RegionMarkers};
use crate::runtime::Runtime;
use crate::stats;

pub const UPDATED_MESSAGE: &str = "README updated with download stats!";

#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseStatsOptions {
    pub repo: GitHubRepo,
    pub readme: PathBuf,
    pub markers: RegionMarkers,
    /// Print one `name: N downloads` line per asset first.
    pub list_assets: bool,
    /// Print the rewritten file instead of writing it.
    pub dry_run: bool,
}

/// Count downloads of the latest release and rewrite the README badge.
#[tracing::instrument(skip(runtime, config))]
pub async fn release_stats<R: Runtime>(
    runtime: R,
    config: ConfigOptions,
    options: ReleaseStatsOptions,
) -> Result<()> {
    let config = Config::new(config)?;
    for line in run(&runtime, &config.github, &options).await? {
        println!("{}", line);
    }
    Ok(())
}

pub(crate) async fn run<R: Runtime, S: ReleaseSource>(
    runtime: &R,
    source: &S,
    options: &ReleaseStatsOptions,
) -> Result<Vec<String>> {
    let release_stats = stats::fetch_release_stats(source, &options.repo).await?;

    let mut output = Vec::new();
    if options.list_assets {
        output.extend(stats::asset_summaries(&release_stats.assets));
    }

    if options.dry_run {
        output.push(readme::preview_readme(
            runtime,
            &options.readme,
            &release_stats,
            &options.markers,
        )?);
    } else {
        readme::update_readme(runtime, &options.readme, &release_stats, &options.markers)?;
        output.push(UPDATED_MESSAGE.to_string());
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelkitError;
    use crate::github::{MockReleaseSource, Release, ReleaseAsset};
    use crate::runtime::{MockRuntime, RealRuntime};
    use std::fs;
    use tempfile::tempdir;

    fn source() -> MockReleaseSource {
        let mut source = MockReleaseSource::new();
        source.expect_latest_release().times(1).returning(|_| {
            Ok(Release {
                tag_name: "v1.0".to_string(),
                assets: vec![
                    ReleaseAsset {
                        name: "app.exe".to_string(),
                        download_count: 10,
                    },
                    ReleaseAsset {
                        name: "latest.yml".to_string(),
                        download_count: 5,
                    },
                ],
            })
        });
        source
    }

    fn options(readme: PathBuf) -> ReleaseStatsOptions {
        ReleaseStatsOptions {
            repo: GitHubRepo::new("NeuroDesk", "neurodesk-app"),
            readme,
            markers: RegionMarkers::default(),
            list_assets: false,
            dry_run: false,
        }
    }

    #[tokio::test]
    async fn test_run_updates_readme() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "top\n<!-- STATS_START -->old<!-- STATS_END -->\nbottom\n").unwrap();

        let output = run(&RealRuntime, &source(), &options(path.clone()))
            .await
            .unwrap();

        assert_eq!(output, vec![UPDATED_MESSAGE.to_string()]);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("badge/v1.0-10_downloads-white"));
        assert!(content.starts_with("top\n<!-- STATS_START -->"));
        assert!(content.ends_with("<!-- STATS_END -->\nbottom\n"));
    }

    #[tokio::test]
    async fn test_run_dry_run_with_asset_list() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("<!-- STATS_START --><!-- STATS_END -->".to_string()));
        runtime.expect_open_read_write().never();

        let mut opts = options(PathBuf::from("README.md"));
        opts.list_assets = true;
        opts.dry_run = true;

        let output = run(&runtime, &source(), &opts).await.unwrap();
        assert_eq!(output.len(), 3);
        assert_eq!(output[0], "app.exe: 10 downloads");
        assert_eq!(output[1], "latest.yml: 5 downloads");
        assert!(output[2].contains("10_downloads"));
    }

    #[tokio::test]
    async fn test_run_missing_markers_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# Nothing to see\n").unwrap();

        let err = run(&RealRuntime, &source(), &options(path.clone()))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RelkitError>(),
            Some(RelkitError::RegionNotFound { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Nothing to see\n");
    }

    #[tokio::test]
    async fn test_run_fetch_failure_leaves_readme_alone() {
        let mut source = MockReleaseSource::new();
        source.expect_latest_release().returning(|_| {
            Err(RelkitError::HttpStatus {
                url: "u".to_string(),
                status: 404,
            }
            .into())
        });
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().never();
        runtime.expect_open_read_write().never();

        let result = run(&runtime, &source, &options(PathBuf::from("README.md"))).await;
        assert!(result.is_err());
    }
}
