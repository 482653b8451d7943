//! # Calculator Configuration
//!
//! In-memory model of a `mkver.conf` (`git-mkver` configuration) file and its
//! serialization to the tool's HOCON syntax.
//!
//! A configuration is built fresh for each run from three fixed templates:
//! the defaults section, a per-source-type patch rule describing how the
//! version string is located and replaced in that file, and the ordered
//! commit message action list (two breaking-change markers whose bump action
//! follows the chosen policy, plus a fixed feature marker mapped to a minor
//! bump). The generated document is either written to a transient file for a
//! single `git-mkver` invocation or discarded entirely when a persisted
//! `mkver.conf` already exists.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::source::SourceType;

/// Which semantic version component a breaking-change commit increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BreakingChangePolicy {
    Major,
    Minor,
    Patch,
}

impl BreakingChangePolicy {
    /// The `git-mkver` bump action corresponding to this policy.
    pub fn bump_action(self) -> BumpAction {
        match self {
            BreakingChangePolicy::Major => BumpAction::IncrementMajor,
            BreakingChangePolicy::Minor => BumpAction::IncrementMinor,
            BreakingChangePolicy::Patch => BumpAction::IncrementPatch,
        }
    }
}

impl std::fmt::Display for BreakingChangePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BreakingChangePolicy::Major => "major",
            BreakingChangePolicy::Minor => "minor",
            BreakingChangePolicy::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// A version bump action as `git-mkver` spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BumpAction {
    IncrementMajor,
    IncrementMinor,
    IncrementPatch,
}

/// The `defaults` section of a `mkver.conf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    pub tag: bool,
    pub tag_message_format: String,
    pub pre_release_format: String,
    pub build_meta_data_format: String,
    pub include_build_meta_data: bool,
    pub when_no_valid_commit_messages: BumpAction,
    /// Names of the active patch rules.
    pub patches: Vec<String>,
}

/// A find/replace template pair within a patch rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub find: String,
    pub replace: String,
}

/// A patch rule describing how the version string is located and rewritten
/// in a given source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub name: String,
    pub file_patterns: Vec<String>,
    pub replacements: Vec<Replacement>,
}

/// One entry of the ordered commit message action list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessageAction {
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<BumpAction>,
}

/// A full `mkver.conf` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MkverConfig {
    pub tag_prefix: String,
    pub defaults: Defaults,
    pub patches: Vec<Patch>,
    pub commit_message_actions: Vec<CommitMessageAction>,
}

impl MkverConfig {
    /// Build a configuration for the given source type and breaking-change
    /// policy. `tag_prefix` is the prefix used before version numbers in git
    /// tags (e.g. `"v"`), empty by default.
    pub fn new(
        source_type: SourceType,
        policy: BreakingChangePolicy,
        tag_prefix: &str,
    ) -> MkverConfig {
        MkverConfig {
            tag_prefix: tag_prefix.to_string(),
            defaults: Defaults {
                tag: false,
                tag_message_format: "Release/{Tag}".to_string(),
                pre_release_format: "RC{PreReleaseNumber}".to_string(),
                build_meta_data_format: "{Branch}.{ShortHash}".to_string(),
                include_build_meta_data: false,
                when_no_valid_commit_messages: BumpAction::IncrementPatch,
                patches: vec![source_type.as_str().to_string()],
            },
            patches: vec![patch_for(source_type)],
            commit_message_actions: commit_message_actions(policy),
        }
    }

    /// Render the configuration in `git-mkver`'s HOCON syntax.
    pub fn to_hocon(&self) -> Result<String> {
        let value = serde_json::to_value(self).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })?;

        match value {
            Value::Object(map) => {
                let mut out = String::new();
                render_fields(&map, 0, &mut out);
                out.push('\n');
                Ok(out)
            }
            _ => Err(Error::Serialization {
                message: "configuration did not serialize to an object".to_string(),
            }),
        }
    }

    /// Write the configuration to `path` in HOCON syntax.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_hocon()?)?;
        Ok(())
    }
}

/// The fixed patch rule template for each supported source type.
///
/// `{VersionRegex}` and `{Version}` are `git-mkver` template placeholders and
/// are passed through literally.
pub fn patch_for(source_type: SourceType) -> Patch {
    let (find, replace) = match source_type {
        SourceType::SetupPy => (r#"version="{VersionRegex}""#, r#"version="{Version}""#),
        SourceType::PyprojectToml => (r#"version = "{VersionRegex}""#, r#"version = "{Version}""#),
        SourceType::PackageJson => (
            r#""version": "{VersionRegex}""#,
            r#""version": "{Version}""#,
        ),
    };

    Patch {
        name: source_type.as_str().to_string(),
        file_patterns: vec![source_type.as_str().to_string()],
        replacements: vec![Replacement {
            find: find.to_string(),
            replace: replace.to_string(),
        }],
    }
}

/// The ordered commit message action list for the given policy.
///
/// The first two entries recognize the breaking-change markers and carry the
/// policy's bump action; the final feature-marker entry is fixed to a minor
/// bump regardless of policy.
pub fn commit_message_actions(policy: BreakingChangePolicy) -> Vec<CommitMessageAction> {
    vec![
        CommitMessageAction {
            pattern: "BREAKING CHANGE".to_string(),
            action: Some(policy.bump_action()),
        },
        CommitMessageAction {
            pattern: "BREAKING-CHANGE".to_string(),
            action: Some(policy.bump_action()),
        },
        CommitMessageAction {
            pattern: "FEA:".to_string(),
            action: Some(BumpAction::IncrementMinor),
        },
    ]
}

fn render_fields(map: &serde_json::Map<String, Value>, indent: usize, out: &mut String) {
    let mut first = true;
    for (key, value) in map {
        if !first {
            out.push('\n');
        }
        first = false;

        out.push_str(&"  ".repeat(indent));
        out.push_str(key);
        // HOCON object values use brace syntax without an equals sign.
        if value.is_object() {
            out.push(' ');
        } else {
            out.push_str(" = ");
        }
        render_value(value, indent, out);
    }
}

fn render_value(value: &Value, indent: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => render_string(s, out),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&"  ".repeat(indent + 1));
                render_value(item, indent + 1, out);
            }
            out.push('\n');
            out.push_str(&"  ".repeat(indent));
            out.push(']');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            render_fields(map, indent + 1, out);
            out.push('\n');
            out.push_str(&"  ".repeat(indent));
            out.push('}');
        }
    }
}

fn render_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
