//! Error kinds surfaced by relkit operations.
//!
//! Functions return `anyhow::Result`; these variants travel inside the
//! `anyhow::Error` and can be recovered with `downcast_ref::<RelkitError>()`.

use std::path::PathBuf;

/// Every failure is fatal: nothing is retried or recovered locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelkitError {
    /// A local input file does not exist.
    FileNotFound(PathBuf),
    /// No line in the local file carries a value for the key.
    KeyNotFound { key: String, path: PathBuf },
    /// The request could not be sent or the response could not be read.
    Network(String),
    /// The server answered with a non-success status.
    HttpStatus { url: String, status: u16 },
    /// Malformed JSON or a missing/mistyped field.
    Parse(String),
    /// `--package_name` is not one of the known packages.
    UnknownPackage(String),
    /// The start/end sentinel pair is missing from the target file.
    RegionNotFound { start: String, end: String },
    /// A start or end sentinel appears more than once in the target file.
    DuplicateRegion { start: String },
}

impl std::fmt::Display for RelkitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelkitError::FileNotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
            RelkitError::KeyNotFound { key, path } => {
                write!(f, "No value for key '{}' in {}", key, path.display())
            }
            RelkitError::Network(msg) => write!(f, "Network error: {}", msg),
            RelkitError::HttpStatus { url, status } => {
                write!(
                    f,
                    "Error: Unable to fetch {}. Status Code: {}",
                    url, status
                )
            }
            RelkitError::Parse(msg) => write!(f, "Parse error: {}", msg),
            RelkitError::UnknownPackage(name) => {
                write!(
                    f,
                    "Unknown package: {}. Expected 'neurodesk' or 'tinyrange'.",
                    name
                )
            }
            RelkitError::RegionNotFound { start, end } => {
                write!(f, "No region delimited by '{}' and '{}' found", start, end)
            }
            RelkitError::DuplicateRegion { start } => {
                write!(f, "More than one region marker pair starting with '{}' found", start)
            }
        }
    }
}

impl std::error::Error for RelkitError {}
