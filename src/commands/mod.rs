//! Entry points behind each CLI subcommand.
//!
//! Every command builds a [`Config`](crate::config::Config) from the global
//! options, runs once against GitHub and prints its result to stdout.

mod check_version;
mod package_version;
mod release_stats;
mod remote_version;
mod sync_version;

pub use check_version::check_version;
pub use package_version::package_version;
pub use release_stats::{ReleaseStatsOptions, release_stats};
pub use remote_version::{RemoteVersionOptions, remote_version};
pub use sync_version::sync_version;
