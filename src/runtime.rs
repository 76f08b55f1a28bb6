use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// File system access used by the commands, mockable in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Open an existing file for reading and writing without truncating it.
    fn open_read_write(&self, path: &Path) -> Result<File>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    #[tracing::instrument(skip(self))]
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    #[tracing::instrument(skip(self, contents))]
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    fn open_read_write(&self, path: &Path) -> Result<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open {} for update", path.display()))
    }
}
