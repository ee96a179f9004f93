use crate::output::emit_result;
use crate::parsers::VersionFile;
use crate::parsers::makefile_parser::MakefileParser;
use crate::parsers::readme_parser::ReadmeParser;
use crate::version::BumpType;
use anyhow::Result;
use log::{debug, info};
use semver::Version;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The two files a bump touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub build_file: PathBuf,
    pub readme: PathBuf,
}

impl Targets {
    pub fn new(root: impl AsRef<Path>, build_file: impl AsRef<Path>, readme: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Targets {
            build_file: root.join(build_file),
            readme: root.join(readme),
        }
    }

    pub fn files(&self) -> [&Path; 2] {
        [self.build_file.as_path(), self.readme.as_path()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct BumpOptions {
    pub strict: bool,
    pub github_output: Option<PathBuf>,
}

pub fn extract_version(path: impl AsRef<Path>) -> Result<Version> {
    MakefileParser::extract_version(path)
}

pub fn rewrite_build_file(path: impl AsRef<Path>, new_version: &Version) -> Result<bool> {
    MakefileParser::rewrite_version(path, new_version)
}

pub fn rewrite_readme(path: impl AsRef<Path>, new_version: &Version) -> Result<bool> {
    ReadmeParser::rewrite_version(path, new_version)
}

/// Reads the current version from the build file and returns it with the bumped one.
pub fn next_version(bump_type: BumpType, targets: &Targets) -> Result<(Version, Version)> {
    let current = extract_version(&targets.build_file)?;
    let next = bump_type.apply(&current)?;
    Ok((current, next))
}

/// Reads the current version from the build file, bumps it, writes it into
/// both targets and emits the result to `out`.
///
/// In strict mode both targets are checked before anything is written, so a
/// missing version line leaves the files untouched.
pub fn run(
    bump_type: BumpType,
    targets: &Targets,
    options: &BumpOptions,
    out: &mut impl Write,
) -> Result<Version> {
    let (current, next) = next_version(bump_type, targets)?;
    info!("Bumping {} version {} -> {}", bump_type, current, next);

    if options.strict {
        debug!("Strict mode: checking both targets before writing");
        MakefileParser::require_version(&targets.build_file)?;
        ReadmeParser::require_version(&targets.readme)?;
    }

    rewrite_build_file(&targets.build_file, &next)?;
    rewrite_readme(&targets.readme, &next)?;

    emit_result(out, &next, options.github_output.as_deref())?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_join_root() {
        let targets = Targets::new("/work/repo", "GNUmakefile", "README.md");
        assert_eq!(targets.build_file, Path::new("/work/repo/GNUmakefile"));
        assert_eq!(targets.readme, Path::new("/work/repo/README.md"));
    }

    #[test]
    fn test_targets_absolute_file_overrides_root() {
        let targets = Targets::new("/work/repo", "/etc/GNUmakefile", "README.md");
        assert_eq!(targets.build_file, Path::new("/etc/GNUmakefile"));
    }

    #[test]
    fn test_targets_files_order() {
        let targets = Targets::new("root", "a", "b");
        assert_eq!(targets.files(), [Path::new("root/a"), Path::new("root/b")]);
    }
}
