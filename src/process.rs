//! Shared subprocess helper.
//!
//! Both the version extractor and the calculator follow the same pattern:
//! run an external command, capture its output, UTF-8 decode it, and strip
//! surrounding whitespace. Failures carry the rendered command line, the
//! exit status (or terminating signal), and the tool's stderr so the user
//! sees the underlying diagnostic unmodified.

use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};

/// Run `command`, returning its trimmed stdout decoded as UTF-8.
///
/// A non-zero exit becomes [`Error::CommandFailed`]; failure to launch the
/// process at all becomes [`Error::CommandSpawn`]. Each command is attempted
/// exactly once, with no retries.
pub fn run(command: &mut Command) -> Result<String> {
    let rendered = render(command);
    log::debug!("Running `{}`", rendered);

    let output = command.output().map_err(|e| Error::CommandSpawn {
        command: rendered.clone(),
        message: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(Error::CommandFailed {
            command: rendered,
            status: describe_status(output.status),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Render a command as a single line for diagnostics.
pub fn render(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

#[cfg(unix)]
fn describe_status(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => format!("exit code {code}"),
        (None, Some(signal)) => format!("signal {signal}"),
        (None, None) => "unknown exit status".to_string(),
    }
}

#[cfg(not(unix))]
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {code}"),
        None => "unknown exit status".to_string(),
    }
}
