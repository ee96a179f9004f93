use crate::bumper::Targets;
use crate::version::BumpType;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum GitMode {
    #[default]
    None,
    Commit,
    CommitTag,
}

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "bump-version")]
pub struct Arguments {
    /// Which version component to increment
    #[arg(value_enum)]
    pub bump_type: BumpType,
    /// Project root the file names are resolved against
    #[arg(long, short, default_value = "./")]
    pub path: PathBuf,
    /// Build file holding the `VERSION=X.Y.Z` line
    #[arg(long, short, default_value = "GNUmakefile")]
    pub build_file: PathBuf,
    /// Documentation file holding the `version = "X.Y.Z"` line
    #[arg(long, short, default_value = "README.md")]
    pub readme: PathBuf,
    #[arg(long, short, value_enum, ignore_case = true, default_value_t = GitMode::None)]
    pub git_mode: GitMode,
    /// Also append `new_version=X.Y.Z` to this file
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,
    /// Fail, before writing anything, if either file lacks its version line
    #[arg(long)]
    pub strict: bool,
    #[arg(long, short)]
    pub verbose: bool,
}

impl Arguments {
    pub fn targets(&self) -> Targets {
        Targets::new(&self.path, &self.build_file, &self.readme)
    }
}
