//! Version checker: compares the version marker of a local config file with
//! the copy of the same file published on GitHub.

mod parser;

use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::RelkitError;
use crate::github::{GitHubRepo, ReleaseSource};
use crate::runtime::Runtime;

pub use parser::extract_quoted_value;

/// Where to find the version marker, locally and remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionCheckOptions {
    pub repo: GitHubRepo,
    pub branch: String,
    pub remote_path: String,
    pub local_path: PathBuf,
    pub key: String,
}

/// Outcome of comparing the local and remote markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// The remote file carries a different value.
    Changed(String),
    /// Both files carry the same value.
    Unchanged,
    /// The remote file has no line with the key.
    MissingRemote,
}

impl VersionCheck {
    /// Text printed for this outcome: the new value, or an empty string.
    pub fn into_output(self) -> String {
        match self {
            VersionCheck::Changed(remote) => remote,
            VersionCheck::Unchanged | VersionCheck::MissingRemote => String::new(),
        }
    }
}

/// Read the version marker from a local file.
#[tracing::instrument(skip(runtime))]
pub fn read_local_version<R: Runtime>(runtime: &R, path: &Path, key: &str) -> Result<String> {
    if !runtime.exists(path) {
        return Err(RelkitError::FileNotFound(path.to_path_buf()).into());
    }

    let content = runtime.read_to_string(path)?;
    extract_quoted_value(&content, key).ok_or_else(|| {
        RelkitError::KeyNotFound {
            key: key.to_string(),
            path: path.to_path_buf(),
        }
        .into()
    })
}

/// Fetch the remote file and extract the marker, if any.
#[tracing::instrument(skip(source))]
pub async fn fetch_remote_version<S: ReleaseSource>(
    source: &S,
    repo: &GitHubRepo,
    branch: &str,
    path: &str,
    key: &str,
) -> Result<Option<String>> {
    let content = source.raw_file(repo, branch, path).await?;
    let version = extract_quoted_value(&content, key);
    debug!("Remote {} in {}/{}: {:?}", key, repo, path, version);
    Ok(version)
}

/// Compare the local marker with the remote one.
#[tracing::instrument(skip(runtime, source))]
pub async fn check_version<R: Runtime, S: ReleaseSource>(
    runtime: &R,
    source: &S,
    options: &VersionCheckOptions,
) -> Result<VersionCheck> {
    let local = read_local_version(runtime, &options.local_path, &options.key)?;
    debug!("Local {} in {}: {}", options.key, options.local_path.display(), local);

    let remote = fetch_remote_version(
        source,
        &options.repo,
        &options.branch,
        &options.remote_path,
        &options.key,
    )
    .await?;

    let check = match remote {
        None => VersionCheck::MissingRemote,
        Some(remote) if remote == local => VersionCheck::Unchanged,
        Some(remote) => {
            info!("New version available: {} -> {}", local, remote);
            VersionCheck::Changed(remote)
        }
    };
    Ok(check)
}

/// Return the remote version if it differs from the local one, otherwise an
/// empty string. A remote file without the key also yields an empty string.
pub async fn find_latest_stable<R: Runtime, S: ReleaseSource>(
    runtime: &R,
    source: &S,
    options: &VersionCheckOptions,
) -> Result<String> {
    Ok(check_version(runtime, source, options).await?.into_output())
}

/// Replace the local file with the published copy and return its version.
///
/// The remote content is written unchanged, whether or not it carries the key.
#[tracing::instrument(skip(runtime, source))]
pub async fn sync_version<R: Runtime, S: ReleaseSource>(
    runtime: &R,
    source: &S,
    options: &VersionCheckOptions,
) -> Result<Option<String>> {
    let content = source
        .raw_file(&options.repo, &options.branch, &options.remote_path)
        .await?;
    runtime.write(&options.local_path, content.as_bytes())?;

    let version = extract_quoted_value(&content, &options.key);
    info!(
        "Copied {}/{} into {} ({} = {:?})",
        options.repo,
        options.remote_path,
        options.local_path.display(),
        options.key,
        version
    );
    Ok(version)
}
