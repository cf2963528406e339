//! Error taxonomy for configuration loading.
//!
//! Follows the pattern of the teacher's `GitError`: a small `Display`-only
//! enum, no `thiserror`, converted to `anyhow::Error` at the call site via
//! `.into()`.

use std::fmt;
use std::path::PathBuf;

/// Fatal errors surfaced to the user. Observation-level failures never reach
/// this type — they are recovered locally and folded into sentinel values.
#[derive(Debug)]
pub enum PromptError {
    /// The config file's YAML could not be parsed at all.
    ConfigSyntax {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// The YAML parsed but violates the document schema (missing/invalid
    /// `version`, unknown node `type`, malformed `remote_branch`, ...).
    ConfigSchema { path: PathBuf, message: String },
    /// The `--config PATH` file could not be read. Only fatal when the path
    /// was given explicitly; an absent default path falls back to the
    /// built-in default document instead of reaching this variant.
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// `--create-default-config` was given but a file already exists at the
    /// target path.
    DefaultConfigExists { path: PathBuf },
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigSyntax { path, source } => {
                write!(f, "invalid YAML in {}: {source}", path.display())
            }
            Self::ConfigSchema { path, message } => {
                write!(f, "invalid configuration in {}: {message}", path.display())
            }
            Self::ConfigIo { path, source } => {
                write!(f, "could not read config file {}: {source}", path.display())
            }
            Self::DefaultConfigExists { path } => {
                write!(f, "config file already exists: {}", path.display())
            }
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigSyntax { source, .. } => Some(source),
            Self::ConfigIo { source, .. } => Some(source),
            Self::ConfigSchema { .. } | Self::DefaultConfigExists { .. } => None,
        }
    }
}
