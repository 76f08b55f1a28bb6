//! Rewrites the sentinel-delimited statistics region of a README.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::RelkitError;
use crate::runtime::Runtime;
use crate::stats::ReleaseStats;

pub const DEFAULT_START_MARKER: &str = "<!-- STATS_START -->";
pub const DEFAULT_END_MARKER: &str = "<!-- STATS_END -->";

/// The literal strings bounding the replaceable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMarkers {
    pub start: String,
    pub end: String,
}

impl Default for RegionMarkers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl RegionMarkers {
    fn not_found(&self) -> RelkitError {
        RelkitError::RegionNotFound {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

/// Escape a value for use in a shields.io static badge path segment.
fn escape_badge_text(text: &str) -> String {
    text.replace('-', "--")
        .replace('_', "__")
        .replace(' ', "_")
}

/// Badge markdown for `stats`, surrounded by blank lines.
pub fn render_badge(stats: &ReleaseStats) -> String {
    format!(
        "\n\n![Static Badge](https://img.shields.io/badge/{}-{}_downloads-white)\n\n",
        escape_badge_text(&stats.tag_name),
        stats.total_downloads
    )
}

/// Replace everything strictly between the start and end markers.
///
/// The markers stay in place and bytes outside them are untouched. Exactly
/// one marker pair must be present.
pub fn replace_region(
    content: &str,
    markers: &RegionMarkers,
    replacement: &str,
) -> Result<String, RelkitError> {
    let start = content
        .find(&markers.start)
        .ok_or_else(|| markers.not_found())?;
    let body_start = start + markers.start.len();

    let body_end = content[body_start..]
        .find(&markers.end)
        .map(|offset| body_start + offset)
        .ok_or_else(|| markers.not_found())?;

    let tail = &content[body_end + markers.end.len()..];
    if content[body_start..body_end].contains(&markers.start)
        || tail.contains(&markers.start)
        || tail.contains(&markers.end)
    {
        return Err(RelkitError::DuplicateRegion {
            start: markers.start.clone(),
        });
    }

    let mut updated =
        String::with_capacity(content.len() - (body_end - body_start) + replacement.len());
    updated.push_str(&content[..body_start]);
    updated.push_str(replacement);
    updated.push_str(&content[body_end..]);
    Ok(updated)
}

/// Rewrite the region in an open handle and return the new content length.
///
/// The handle is left positioned at the end of the new content; the caller
/// truncates anything beyond the returned length.
pub fn rewrite_region<F: Read + Write + Seek>(
    handle: &mut F,
    markers: &RegionMarkers,
    replacement: &str,
) -> Result<u64> {
    let mut content = String::new();
    handle
        .read_to_string(&mut content)
        .context("Failed to read file content")?;

    let updated = replace_region(&content, markers, replacement)?;

    handle
        .seek(SeekFrom::Start(0))
        .context("Failed to seek to start of file")?;
    handle
        .write_all(updated.as_bytes())
        .context("Failed to write updated content")?;
    handle.flush().context("Failed to flush updated content")?;

    debug!(
        "Rewrote region: {} bytes -> {} bytes",
        content.len(),
        updated.len()
    );
    Ok(updated.len() as u64)
}

/// Replace the statistics region of the file at `path` with a fresh badge.
#[tracing::instrument(skip(runtime))]
pub fn update_readme<R: Runtime>(
    runtime: &R,
    path: &Path,
    stats: &ReleaseStats,
    markers: &RegionMarkers,
) -> Result<()> {
    if !runtime.exists(path) {
        return Err(RelkitError::FileNotFound(path.to_path_buf()).into());
    }

    let mut file = runtime.open_read_write(path)?;
    let len = rewrite_region(&mut file, markers, &render_badge(stats))?;
    file.set_len(len)
        .with_context(|| format!("Failed to truncate {}", path.display()))?;

    info!(
        "Updated {} with {} downloads for {}",
        path.display(),
        stats.total_downloads,
        stats.tag_name
    );
    Ok(())
}

/// Content the file at `path` would have after [`update_readme`].
#[tracing::instrument(skip(runtime))]
pub fn preview_readme<R: Runtime>(
    runtime: &R,
    path: &Path,
    stats: &ReleaseStats,
    markers: &RegionMarkers,
) -> Result<String> {
    if !runtime.exists(path) {
        return Err(RelkitError::FileNotFound(path.to_path_buf()).into());
    }

    let content = runtime.read_to_string(path)?;
    Ok(replace_region(&content, markers, &render_badge(stats))?)
}
