//! # check-semantic-version
//!
//! Checks that a package's declared version matches the semantic version
//! expected given the commit history since the last release tag.
//!
//! The declared version is read from one of three package metadata files
//! (`setup.py`, `pyproject.toml`, `package.json`) by shelling out to the
//! tool that owns that format. The expected version comes from the external
//! [`git-mkver`](https://github.com/idc101/git-mkver) calculator, driven by
//! either a persisted `mkver.conf` or a configuration generated transiently
//! for the run. The two strings are compared byte-for-byte and the result is
//! reported as a single colored console line plus the process exit code.
//!
//! ## Quick Example
//!
//! ```no_run
//! use check_semantic_version::check;
//! use check_semantic_version::config::BreakingChangePolicy;
//! use check_semantic_version::output::OutputConfig;
//! use std::path::Path;
//!
//! let output = OutputConfig::default();
//! let matched = check::check_versions_match(
//!     Path::new("pyproject.toml"),
//!     BreakingChangePolicy::Major,
//!     &output,
//! )?;
//! # Ok::<(), check_semantic_version::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Source type (`source`)**: the closed set of metadata files a version
//!   can be read from, resolved from the input path's filename.
//! - **Extraction (`extract`)**: the per-type command table producing the
//!   currently declared version string.
//! - **Calculator configuration (`config`)**: the in-memory `mkver.conf`
//!   model and its HOCON serialization.
//! - **Expected version (`calculator`)**: the `git-mkver` invocation and the
//!   transient-versus-persisted configuration lifecycle.
//! - **Check (`check`)**: comparison of the two opaque version strings and
//!   the pass/fail report line.

pub mod calculator;
pub mod check;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod process;
pub mod source;
