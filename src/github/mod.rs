//! GitHub access: latest-release metadata from the REST API and raw file
//! content from the raw content host.

mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, DEFAULT_RAW_URL, GitHub, ReleaseSource};
#[cfg(test)]
pub use client::MockReleaseSource;
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};
