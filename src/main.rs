use anyhow::Result;
use clap::Parser;
use relkit::commands::{self, ReleaseStatsOptions, RemoteVersionOptions};
use relkit::config::ConfigOptions;
use relkit::github::GitHubRepo;
use relkit::readme::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, RegionMarkers};
use relkit::version::VersionCheckOptions;
use std::path::PathBuf;

/// relkit - release housekeeping for GitHub-hosted projects
///
/// Checks published version markers, reads package versions and keeps the
/// download badge in a README up to date.
///
/// Examples:
///   relkit check-version                      # Print the new upstream version, if any
///   relkit sync-version                       # Copy the published version file locally
///   relkit package-version --package_name tinyrange
///   relkit release-stats --readme README.md
#[derive(Parser, Debug)]
#[command(author, version = env!("RELKIT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", env = "RELKIT_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Raw content URL (defaults to https://raw.githubusercontent.com)
    #[arg(long = "raw-url", env = "RELKIT_RAW_URL", value_name = "URL", global = true)]
    pub raw_url: Option<String>,

    /// Request timeout in seconds (defaults to 10)
    #[arg(
        long = "timeout",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout: Option<u64>,
}

impl Cli {
    fn config_options(&self) -> ConfigOptions {
        ConfigOptions {
            api_url: self.api_url.clone(),
            raw_url: self.raw_url.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the published version if it differs from the local one
    CheckVersion(CheckVersionArgs),

    /// Print the published version
    RemoteVersion(RemoteVersionArgs),

    /// Replace the local version file with the published copy
    SyncVersion(CheckVersionArgs),

    /// Print a package version from a package.json file
    PackageVersion(PackageVersionArgs),

    /// Count downloads of the latest release and update the README badge
    ReleaseStats(ReleaseStatsArgs),
}

#[derive(clap::Args, Debug)]
pub struct RemoteFileArgs {
    /// Repository publishing the version file
    #[arg(long, value_name = "OWNER/REPO", default_value = "NeuroDesk/neurodesk.github.io")]
    pub repo: GitHubRepo,

    /// Branch to read the version file from
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Path of the version file inside the repository
    #[arg(long = "remote-path", value_name = "PATH", default_value = "data/neurodesktop.toml")]
    pub remote_path: String,

    /// Key whose quoted value is the version
    #[arg(long, default_value = "version")]
    pub key: String,
}

#[derive(clap::Args, Debug)]
pub struct CheckVersionArgs {
    #[command(flatten)]
    pub remote: RemoteFileArgs,

    /// Local copy of the version file
    #[arg(long, value_name = "PATH", default_value = "data/neurodesktop.toml")]
    pub local: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct RemoteVersionArgs {
    #[command(flatten)]
    pub remote: RemoteFileArgs,
}

#[derive(clap::Args, Debug)]
pub struct PackageVersionArgs {
    /// Package name: "neurodesk" or "tinyrange"
    #[arg(long = "package_name", alias = "package-name", value_name = "NAME")]
    pub package_name: String,

    /// Package descriptor to read
    #[arg(long, value_name = "PATH", default_value = "package.json")]
    pub path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ReleaseStatsArgs {
    /// Repository whose latest release is counted
    #[arg(long, value_name = "OWNER/REPO", default_value = "NeuroDesk/neurodesk-app")]
    pub repo: GitHubRepo,

    /// README file to update
    #[arg(long, value_name = "PATH", default_value = "README.md")]
    pub readme: PathBuf,

    /// Marker opening the statistics region
    #[arg(long = "start-marker", default_value = DEFAULT_START_MARKER)]
    pub start_marker: String,

    /// Marker closing the statistics region
    #[arg(long = "end-marker", default_value = DEFAULT_END_MARKER)]
    pub end_marker: String,

    /// Print per-asset download counts
    #[arg(long = "list-assets")]
    pub list_assets: bool,

    /// Print the updated README instead of writing it
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl RemoteFileArgs {
    fn into_options(self) -> RemoteVersionOptions {
        RemoteVersionOptions {
            repo: self.repo,
            branch: self.branch,
            remote_path: self.remote_path,
            key: self.key,
        }
    }
}

impl CheckVersionArgs {
    fn into_options(self) -> VersionCheckOptions {
        VersionCheckOptions {
            repo: self.remote.repo,
            branch: self.remote.branch,
            remote_path: self.remote.remote_path,
            local_path: self.local,
            key: self.remote.key,
        }
    }
}

impl ReleaseStatsArgs {
    fn into_options(self) -> ReleaseStatsOptions {
        ReleaseStatsOptions {
            repo: self.repo,
            readme: self.readme,
            markers: RegionMarkers {
                start: self.start_marker,
                end: self.end_marker,
            },
            list_assets: self.list_assets,
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = cli.config_options();
    let runtime = relkit::runtime::RealRuntime;

    match cli.command {
        Commands::CheckVersion(args) => {
            commands::check_version(runtime, config, args.into_options()).await?
        }
        Commands::SyncVersion(args) => {
            commands::sync_version(runtime, config, args.into_options()).await?
        }
        Commands::RemoteVersion(args) => {
            commands::remote_version(config, args.remote.into_options()).await?
        }
        Commands::PackageVersion(args) => {
            commands::package_version(runtime, &args.path, &args.package_name)?
        }
        Commands::ReleaseStats(args) => {
            commands::release_stats(runtime, config, args.into_options()).await?
        }
    }
    Ok(())
}
