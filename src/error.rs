use crate::version::BumpType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("VERSION not found in {}", .0.display())]
    VersionNotFound(PathBuf),
    #[error("Invalid bump type '{0}', expected one of: major, minor, patch")]
    InvalidBumpType(String),
    #[error("Invalid version component: {0}")]
    InvalidVersion(String),
    #[error("Cannot apply a {bump_type} bump to {version}: component would overflow")]
    VersionOverflow { version: String, bump_type: BumpType },
    #[error("Pattern `{pattern}` not found in {}", .path.display())]
    PatternNotFound { path: PathBuf, pattern: String },
}
