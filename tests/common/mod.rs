//! Shared test utilities for the CLI end-to-end tests.
//!
//! The external collaborators (`python`, `poetry`, `jq`, `git-mkver`) are
//! replaced with small shell-script stubs installed into a directory that is
//! prepended to the child's `PATH`, keeping the tests hermetic while still
//! exercising the real command table and subprocess plumbing.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_file("package.json", fixtures::PACKAGE_JSON)
//!         .with_stub("jq", stubs::JQ)
//!         .with_stub("git-mkver", &stubs::echo_version("1.5.3"));
//!     fixture.command().arg("package.json").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::fixtures;
    #[allow(unused_imports)]
    pub use super::stubs;
    pub use super::TestFixture;
}

/// Package metadata fixture files.
#[allow(dead_code)]
pub mod fixtures {
    /// A minimal `setup.py` declaring version 0.3.4.
    pub const SETUP_PY: &str = r#"from setuptools import setup

setup(name="test-package", version="0.3.4")
"#;

    /// A minimal `pyproject.toml` declaring version 0.6.3.
    pub const PYPROJECT_TOML: &str = r#"[tool.poetry]
name = "test-package"
version = "0.6.3"
description = "A test package."
"#;

    /// A minimal `package.json` declaring version 1.5.3.
    pub const PACKAGE_JSON: &str = r#"{
  "name": "test-package",
  "version": "1.5.3",
  "private": true
}
"#;

    /// A `package.json` with no version field at all.
    pub const PACKAGE_JSON_NO_VERSION: &str = r#"{
  "name": "test-package",
  "private": true
}
"#;
}

/// Shell-script stand-ins for the external tools.
#[allow(dead_code)]
pub mod stubs {
    /// `jq --raw-output .version <file>`: extracts the version field from the
    /// file given as the last argument, printing `null` when absent, exactly
    /// as jq reports a missing field.
    pub const JQ: &str = r#"#!/bin/sh
for arg; do file="$arg"; done
version=$(sed -n 's/.*"version": *"\([^"]*\)".*/\1/p' "$file")
if [ -z "$version" ]; then echo null; else echo "$version"; fi
"#;

    /// `python setup.py --version`: reads the version keyword out of the
    /// setup.py named by its first argument, resolved in the working
    /// directory the caller set.
    pub const PYTHON: &str = r#"#!/bin/sh
sed -n 's/.*version="\([^"]*\)".*/\1/p' "$1"
"#;

    /// `poetry version -s`: reads the version from the pyproject.toml in the
    /// working directory the caller set.
    pub const POETRY: &str = r#"#!/bin/sh
sed -n 's/^version = "\([^"]*\)".*/\1/p' pyproject.toml
"#;

    /// A `git-mkver` that fails the way the real tool does outside a git
    /// repository.
    pub const GIT_MKVER_FAILING: &str = r#"#!/bin/sh
echo "git-mkver: No tags found in repository" >&2
exit 1
"#;

    /// A `git-mkver` printing a fixed next version.
    pub fn echo_version(version: &str) -> String {
        format!("#!/bin/sh\necho {version}\n")
    }

    /// A `git-mkver` that copies the configuration file it was handed
    /// (`-c <config> next`) to the path in `$MKVER_CONFIG_CAPTURE` before
    /// printing a fixed next version.
    pub fn capture_config(version: &str) -> String {
        format!("#!/bin/sh\ncp \"$2\" \"$MKVER_CONFIG_CAPTURE\"\necho {version}\n")
    }
}

/// A temporary project directory with fixture files and stubbed external
/// tools on `PATH`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with an empty project directory and an empty
    /// stub-tool directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("stub-bin")).expect("Failed to create stub dir");
        Self { temp_dir }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Install an executable stub tool under the given name.
    pub fn with_stub(self, name: &str, script: &str) -> Self {
        let path = self.temp_dir.path().join("stub-bin").join(name);
        fs::write(&path, script).expect("Failed to write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
        self
    }

    /// Get the path to the project directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a CLI command running in the project directory with the stub
    /// tools first on `PATH`.
    pub fn command(&self) -> assert_cmd::Command {
        let stub_dir = self.temp_dir.path().join("stub-bin");
        let path_var = match std::env::var("PATH") {
            Ok(existing) => format!("{}:{}", stub_dir.display(), existing),
            Err(_) => stub_dir.display().to_string(),
        };

        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("check-semantic-version");
        cmd.current_dir(self.path()).env("PATH", path_var);
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
        assert!(fixture.path().join("stub-bin").exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file("package.json", fixtures::PACKAGE_JSON);
        assert!(fixture.path().join("package.json").exists());
    }

    #[test]
    fn test_fixture_with_stub_is_executable() {
        let fixture = TestFixture::new().with_stub("git-mkver", &stubs::echo_version("1.0.0"));
        let stub = fixture.path().join("stub-bin/git-mkver");
        assert!(stub.exists());
        let mode = fs::metadata(&stub).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
