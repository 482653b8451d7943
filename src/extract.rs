//! # Version Extraction
//!
//! Reads the currently declared version out of a package metadata file by
//! shelling out to the tool that owns that format:
//!
//! - `setup.py`: run the script itself with `--version`.
//! - `pyproject.toml`: ask `poetry` to report the bare version.
//! - `package.json`: query the `version` field with `jq`.
//!
//! The first two tools resolve their project file relative to a directory, so
//! the child process is given the metadata file's parent directory as its
//! working directory. The parent process's working directory is never
//! touched.

use std::path::Path;
use std::process::Command;

use crate::error::Result;
use crate::process;
use crate::source::SourceType;

/// Extract the declared version from the metadata file at `path`.
///
/// The returned string is trimmed but otherwise unvalidated; an empty string
/// or the literal `null` (a missing `version` field as reported by `jq`)
/// means no version was found and is checked by the caller, not here. A
/// failing tool propagates as a structured process error carrying its
/// command line, exit status and stderr.
pub fn current_version(path: &Path, source_type: SourceType) -> Result<String> {
    let mut command = extraction_command(path, source_type)?;
    process::run(&mut command)
}

/// Build the extraction command for `source_type` without running it.
fn extraction_command(path: &Path, source_type: SourceType) -> Result<Command> {
    match source_type {
        SourceType::SetupPy => {
            let mut command = Command::new("python");
            command.args(["setup.py", "--version"]);
            command.current_dir(containing_directory(path)?);
            Ok(command)
        }
        SourceType::PyprojectToml => {
            let mut command = Command::new("poetry");
            command.args(["version", "-s"]);
            command.current_dir(containing_directory(path)?);
            Ok(command)
        }
        SourceType::PackageJson => {
            let mut command = Command::new("jq");
            command.args(["--raw-output", ".version"]).arg(path);
            Ok(command)
        }
    }
}

/// The fully resolved directory containing `path`.
fn containing_directory(path: &Path) -> Result<std::path::PathBuf> {
    let absolute = path.canonicalize()?;
    // canonicalize() yields an absolute file path, so a parent always exists.
    Ok(absolute
        .parent()
        .unwrap_or_else(|| Path::new("/"))
        .to_path_buf())
}
