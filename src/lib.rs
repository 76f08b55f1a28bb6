pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod package;
pub mod readme;
pub mod runtime;
pub mod stats;
pub mod version;

pub use error::RelkitError;
