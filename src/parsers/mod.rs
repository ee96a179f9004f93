use crate::error::BumpError;
use crate::version::version_from_parts;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::{NoExpand, Regex};
use semver::Version;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod makefile_parser;
pub mod readme_parser;

/// A text file that carries a `major.minor.patch` version in one known line shape.
///
/// Implementors supply the pattern and the replacement line; reading, scanning
/// and rewriting are shared.
pub trait VersionFile {
    /// Pattern whose three capture groups are the major, minor and patch digits.
    fn version_match_regex() -> Result<Regex>;
    /// The full replacement text for a match.
    fn version_line_format(version: &Version) -> String;

    /// Scans `path` line by line and returns the version on the first matching line.
    fn extract_version(path: impl AsRef<Path>) -> Result<Version> {
        let path = path.as_ref();
        let version_regex = Self::version_match_regex()?;
        let file = File::open(path)
            .with_context(|| format!("Failed to open '{}'", path.display()))?;

        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("Failed to read '{}'", path.display()))?;
            if let Some(captures) = version_regex.captures(&line) {
                let version = version_from_parts(&captures[1], &captures[2], &captures[3])?;
                debug!("Found current version {} in '{}'", version, path.display());
                return Ok(version);
            }
        }

        Err(BumpError::VersionNotFound(path.to_path_buf()).into())
    }

    /// Whether `path` holds a line this file type knows how to rewrite.
    fn contains_version(path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        Ok(Self::version_match_regex()?.is_match(&contents))
    }

    /// Replaces the first version match in `path` with `version` and writes the
    /// whole file back. Returns `false` when nothing matched; the file is still
    /// written, with its content unchanged.
    fn rewrite_version(path: impl AsRef<Path>, version: &Version) -> Result<bool> {
        let path = path.as_ref();
        let version_regex = Self::version_match_regex()?;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;

        let replaced = version_regex.is_match(&contents);
        if replaced {
            info!("Updating '{}' to {}", path.display(), version);
        } else {
            warn!(
                "No line matching `{}` in '{}', leaving it unchanged",
                version_regex.as_str(),
                path.display()
            );
        }

        let line = Self::version_line_format(version);
        let new_contents = version_regex.replace(&contents, NoExpand(&line));
        std::fs::write(path, new_contents.as_bytes())
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        Ok(replaced)
    }

    /// Fails with [`BumpError::PatternNotFound`] unless `path` holds a version line.
    fn require_version(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if Self::contains_version(path)? {
            return Ok(());
        }
        Err(BumpError::PatternNotFound {
            path: path.to_path_buf(),
            pattern: Self::version_match_regex()?.as_str().to_string(),
        }
        .into())
    }
}
