use crate::error::BumpError;
use clap::ValueEnum;
use semver::Version;
use std::fmt;
use std::str::FromStr;

/// Which component of a `major.minor.patch` version to increment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum BumpType {
    Major,
    Minor,
    Patch,
}

impl BumpType {
    /// Returns the next version. Lower components are reset to zero.
    ///
    /// Fails with [`BumpError::VersionOverflow`] when the bumped component is
    /// already `u64::MAX`.
    pub fn apply(self, version: &Version) -> Result<Version, BumpError> {
        let overflow = || BumpError::VersionOverflow {
            version: version.to_string(),
            bump_type: self,
        };
        Ok(match self {
            BumpType::Major => {
                Version::new(version.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            BumpType::Minor => Version::new(
                version.major,
                version.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpType::Patch => Version::new(
                version.major,
                version.minor,
                version.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        })
    }
}

impl FromStr for BumpType {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpType::Major),
            "minor" => Ok(BumpType::Minor),
            "patch" => Ok(BumpType::Patch),
            other => Err(BumpError::InvalidBumpType(other.to_string())),
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Bumps `version` according to a bump type given as text.
///
/// Fails with [`BumpError::InvalidBumpType`] for anything other than
/// `major`, `minor` or `patch`.
pub fn bump(version: &Version, bump_type: &str) -> Result<Version, BumpError> {
    let bump_type: BumpType = bump_type.parse()?;
    bump_type.apply(version)
}

/// Builds a version from the three digit runs captured out of a file.
///
/// Leading zeros are dropped, so `01` reads as `1`.
pub fn version_from_parts(major: &str, minor: &str, patch: &str) -> Result<Version, BumpError> {
    Ok(Version::new(
        parse_component(major)?,
        parse_component(minor)?,
        parse_component(patch)?,
    ))
}

fn parse_component(digits: &str) -> Result<u64, BumpError> {
    digits
        .parse::<u64>()
        .map_err(|e| BumpError::InvalidVersion(format!("'{digits}': {e}")))
}
