//! Bumps the `VERSION=X.Y.Z` line of a build file and mirrors the new version
//! into a README, for use as a CI release step.

pub mod arguments;
pub mod bumper;
pub mod error;
pub mod git;
pub mod output;
pub mod parsers;
pub mod version;

pub use bumper::{BumpOptions, Targets, run};
pub use error::BumpError;
pub use version::{BumpType, bump};
