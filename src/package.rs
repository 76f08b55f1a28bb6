//! Package versions read from a JSON package descriptor (`package.json`).

use anyhow::Result;
use log::debug;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::RelkitError;
use crate::runtime::Runtime;

/// Packages whose version is tracked in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageName {
    Neurodesk,
    Tinyrange,
}

impl PackageName {
    /// Descriptor field holding this package's version.
    pub fn field(self) -> &'static str {
        match self {
            PackageName::Neurodesk => "version",
            PackageName::Tinyrange => "tinyrange_version",
        }
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageName::Neurodesk => write!(f, "neurodesk"),
            PackageName::Tinyrange => write!(f, "tinyrange"),
        }
    }
}

impl FromStr for PackageName {
    type Err = RelkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neurodesk" => Ok(PackageName::Neurodesk),
            "tinyrange" => Ok(PackageName::Tinyrange),
            other => Err(RelkitError::UnknownPackage(other.to_string())),
        }
    }
}

/// Read the version of `package` from the descriptor at `path`.
#[tracing::instrument(skip(runtime))]
pub fn get_package_version<R: Runtime>(
    runtime: &R,
    path: &Path,
    package: PackageName,
) -> Result<String> {
    if !runtime.exists(path) {
        return Err(RelkitError::FileNotFound(path.to_path_buf()).into());
    }

    let content = runtime.read_to_string(path)?;
    let descriptor: Value = serde_json::from_str(&content)
        .map_err(|e| RelkitError::Parse(format!("invalid JSON in {}: {}", path.display(), e)))?;

    let field = package.field();
    let version = match descriptor.get(field) {
        Some(Value::String(version)) => version.clone(),
        Some(other) => {
            return Err(RelkitError::Parse(format!(
                "field '{}' in {} is not a string: {}",
                field,
                path.display(),
                other
            ))
            .into());
        }
        None => {
            return Err(RelkitError::Parse(format!(
                "field '{}' missing from {}",
                field,
                path.display()
            ))
            .into());
        }
    };

    debug!("{} version from {}: {}", package, path.display(), version);
    Ok(version)
}
