use anyhow::Result;
use std::path::Path;

use crate::package::{self, PackageName};
use crate::runtime::Runtime;

/// Print the version of `package_name` from the descriptor at `path`.
#[tracing::instrument(skip(runtime))]
pub fn package_version<R: Runtime>(runtime: R, path: &Path, package_name: &str) -> Result<()> {
    println!("{}", run(&runtime, path, package_name)?);
    Ok(())
}

pub(crate) fn run<R: Runtime>(runtime: &R, path: &Path, package_name: &str) -> Result<String> {
    let package = package_name.parse::<PackageName>()?;
    package::get_package_version(runtime, path, package)
}
