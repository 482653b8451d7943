//! # Version Check Orchestration
//!
//! Wires the extractor, the calculator and the comparator together, and
//! formats the single human-readable report line this tool prints per run.

use std::path::Path;

use crate::calculator;
use crate::config::BreakingChangePolicy;
use crate::error::Result;
use crate::extract;
use crate::output::OutputConfig;
use crate::source::SourceType;

/// Check that the version declared in the file at `path` matches the
/// semantic version expected from the commit history.
///
/// Prints one pass/fail line to stdout and returns whether the check passed.
pub fn check_versions_match(
    path: &Path,
    policy: BreakingChangePolicy,
    output: &OutputConfig,
) -> Result<bool> {
    let source_type = SourceType::from_path(path)?;

    // The extractor runs before the calculator so that diagnostics for a
    // broken metadata file surface before any commit-history work.
    let current = extract::current_version(path, source_type)?;
    let expected = calculator::expected_version(source_type, policy)?;

    Ok(compare_versions(&current, &expected.version, output))
}

/// Compare the current and expected version strings, printing the report
/// line. Returns `true` only when `current` equals `expected` and is neither
/// empty nor the literal `null`.
pub fn compare_versions(current: &str, expected: &str, output: &OutputConfig) -> bool {
    if current.is_empty() || current == "null" {
        println!("{} {}", output.failed_label(), no_version_message());
        return false;
    }

    if current != expected {
        println!(
            "{} {}",
            output.failed_label(),
            mismatch_message(current, expected)
        );
        return false;
    }

    println!("{} {}", output.passed_label(), match_message(expected));
    true
}

fn no_version_message() -> String {
    "No current version found.".to_string()
}

fn mismatch_message(current: &str, expected: &str) -> String {
    format!(
        "The current version ({current}) is different from the expected semantic version \
         ({expected})."
    )
}

fn match_message(expected: &str) -> String {
    format!("The current version is the same as the expected semantic version: {expected}.")
}
