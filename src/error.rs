//! # Error Handling
//!
//! Centralized error type for the `check-semantic-version` tool, built with
//! `thiserror`. Subprocess failures are surfaced verbatim (including the
//! underlying tool's stderr) rather than wrapped or suppressed, since the
//! user needs the tool's own diagnostic to fix their environment.
//!
//! Note that a failed version check (mismatch or missing current version) is
//! not an error: it is reported through the comparator's return value and the
//! process exit code. The variants here cover genuinely exceptional paths.

use thiserror::Error;

/// Main error type for check-semantic-version operations
#[derive(Error, Debug)]
pub enum Error {
    /// The input path's filename is not one of the recognized version source
    /// types. Raised before any subprocess is attempted.
    #[error(
        "Unsupported version source received: {file_name:?}; options are \
         [\"setup.py\", \"pyproject.toml\", \"package.json\"]."
    )]
    UnsupportedSourceType { file_name: String },

    /// An external tool could not be launched at all (e.g. the binary is not
    /// installed or not on `PATH`).
    #[error("Failed to run `{command}`: {message}")]
    CommandSpawn { command: String, message: String },

    /// An external tool ran but exited unsuccessfully.
    ///
    /// `status` is either `exit code N` or, if the process was killed,
    /// `signal N`.
    #[error("Command `{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// An error occurred during serialization of the calculator
    /// configuration.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
