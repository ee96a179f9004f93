use anyhow::{Context, Result};
use log::debug;
use semver::Version;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Name under which the new version is published to later pipeline steps.
pub const OUTPUT_NAME: &str = "new_version";

/// The legacy `::set-output` workflow command line.
pub fn set_output_line(version: &Version) -> String {
    format!("::set-output name={OUTPUT_NAME}::{version}")
}

/// Writes the new version to `out` as a `::set-output` annotation and, when
/// `github_output` is given, appends `new_version=X.Y.Z` to that file.
pub fn emit_result(
    out: &mut impl Write,
    version: &Version,
    github_output: Option<&Path>,
) -> Result<()> {
    writeln!(out, "{}", set_output_line(version))?;
    out.flush()?;

    if let Some(path) = github_output {
        debug!("Appending {}={} to '{}'", OUTPUT_NAME, version, path.display());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open GitHub output file '{}'", path.display()))?;
        writeln!(file, "{OUTPUT_NAME}={version}")
            .with_context(|| format!("Failed to write GitHub output file '{}'", path.display()))?;
    }

    Ok(())
}
