//! # Version Source Types
//!
//! The closed set of package metadata files a version can be read from. The
//! type is derived from the filename component of the input path and drives
//! both the extraction command and the calculator configuration patch
//! template.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// The type of file the current package version is declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// A Python `setup.py` script.
    SetupPy,
    /// A Python `pyproject.toml` manifest.
    PyprojectToml,
    /// A Node.js `package.json` manifest.
    PackageJson,
}

impl SourceType {
    /// All supported source types, in documentation order.
    pub const ALL: [SourceType; 3] = [
        SourceType::SetupPy,
        SourceType::PyprojectToml,
        SourceType::PackageJson,
    ];

    /// The filename this source type corresponds to.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::SetupPy => "setup.py",
            SourceType::PyprojectToml => "pyproject.toml",
            SourceType::PackageJson => "package.json",
        }
    }

    /// Resolve a source type from the filename component of `path`.
    ///
    /// Fails with [`Error::UnsupportedSourceType`] if the filename is not one
    /// of the three recognized names. No subprocess is involved here.
    pub fn from_path(path: &Path) -> Result<SourceType> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match file_name.as_str() {
            "setup.py" => Ok(SourceType::SetupPy),
            "pyproject.toml" => Ok(SourceType::PyprojectToml),
            "package.json" => Ok(SourceType::PackageJson),
            _ => Err(Error::UnsupportedSourceType { file_name }),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
