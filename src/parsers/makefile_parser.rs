use crate::parsers::VersionFile;
use regex::Regex;
use semver::Version;

/// `VERSION=X.Y.Z` at the start of a line, as in a GNUmakefile.
pub struct MakefileParser;

impl VersionFile for MakefileParser {
    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r"(?m)^VERSION=([0-9]+)\.([0-9]+)\.([0-9]+)")?)
    }

    fn version_line_format(version: &Version) -> String {
        format!("VERSION={version}")
    }
}
