use anyhow::Result;
use bump_version::{
    arguments::{Arguments, GitMode},
    bumper::{self, BumpOptions},
    git::GitTracker,
};
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let targets = args.targets();
    let options = BumpOptions {
        strict: args.strict,
        github_output: args.github_output.clone(),
    };

    let git = match args.git_mode {
        GitMode::None => None,
        mode => {
            let (_, planned) = bumper::next_version(args.bump_type, &targets)?;
            let git = GitTracker::open(&args.path)?;
            git.preflight(mode, &planned)?;
            Some(git)
        }
    };

    let new_version = bumper::run(args.bump_type, &targets, &options, &mut std::io::stdout().lock())?;

    if let Some(git) = git {
        git.execute_git_mode(args.git_mode, &new_version, &targets.files())?;
    }

    Ok(())
}
