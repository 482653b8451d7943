//! CLI argument parsing and execution

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use check_semantic_version::check;
use check_semantic_version::config::BreakingChangePolicy;
use check_semantic_version::output::OutputConfig;

/// Check that a package's declared version matches the semantic version
/// expected from its commit history since the last release tag.
#[derive(Parser, Debug)]
#[command(name = "check-semantic-version")]
#[command(version, disable_version_flag = true, about, long_about = None)]
pub struct Cli {
    /// Path to the version source file. The file must be one of these types:
    /// setup.py, pyproject.toml, or package.json.
    path: PathBuf,

    /// The semantic version component that a breaking change increments.
    /// Ignored if a `mkver.conf` file is present in the working directory.
    #[arg(value_enum, default_value_t = BreakingChangePolicy::Major)]
    breaking_change_indicated_by: BreakingChangePolicy,

    /// Print the version of the check-semantic-version CLI.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Run the check. Returns whether the declared and expected versions
    /// match; extraction or calculator failures propagate as errors.
    pub fn execute(self) -> Result<bool> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        let matched =
            check::check_versions_match(&self.path, self.breaking_change_indicated_by, &output)?;

        Ok(matched)
    }
}

fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .try_init();
}
