//! # Expected-Version Calculation
//!
//! Computes the semantic version the package should currently declare by
//! invoking the external `git-mkver` tool against the repository's commit
//! history.
//!
//! Exactly one configuration source is used per run: a `mkver.conf` already
//! present in the working directory is passed through verbatim (and the
//! breaking-change policy argument is ignored with a warning), otherwise a
//! configuration is generated and written to a transient file that lives
//! only for the single `git-mkver` invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::NamedTempFile;

use crate::config::{BreakingChangePolicy, MkverConfig};
use crate::error::Result;
use crate::process;
use crate::source::SourceType;

/// Conventional name of a persisted `git-mkver` configuration file.
pub const MKVER_CONFIG_FILE: &str = "mkver.conf";

/// Which configuration was handed to the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A `mkver.conf` found in the working directory was used as-is.
    Existing(PathBuf),
    /// A configuration was generated for this run and discarded afterwards.
    Generated,
}

/// The calculator's result: the expected version plus which configuration
/// source produced it, so callers can tell when their policy argument was
/// ignored without scraping logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedVersion {
    pub version: String,
    pub config_source: ConfigSource,
}

/// Compute the expected semantic version as of the current HEAD commit.
///
/// Looks for [`MKVER_CONFIG_FILE`] in the current working directory; when
/// absent, a configuration is built from `source_type` and `policy` and
/// written to a transient file which is removed once `git-mkver` has run,
/// on success and failure alike.
pub fn expected_version(
    source_type: SourceType,
    policy: BreakingChangePolicy,
) -> Result<ExpectedVersion> {
    let persisted = Path::new(MKVER_CONFIG_FILE);

    if persisted.exists() {
        let config_path = persisted.canonicalize()?;
        log::warn!(
            "Using existing `{}`; the `{}` breaking-change policy argument is ignored.",
            MKVER_CONFIG_FILE,
            policy
        );
        let version = run_calculator(&config_path)?;
        return Ok(ExpectedVersion {
            version,
            config_source: ConfigSource::Existing(config_path),
        });
    }

    log::warn!("No `{}` file found. Generating one instead.", MKVER_CONFIG_FILE);

    // The guard deletes the transient file on every exit path, including
    // calculator failure.
    let transient = NamedTempFile::new()?;
    MkverConfig::new(source_type, policy, "").write(transient.path())?;

    let version = run_calculator(transient.path())?;
    Ok(ExpectedVersion {
        version,
        config_source: ConfigSource::Generated,
    })
}

fn run_calculator(config_path: &Path) -> Result<String> {
    let mut command = Command::new("git-mkver");
    command.arg("-c").arg(config_path).arg("next");
    process::run(&mut command)
}
