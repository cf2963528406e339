//! Default config location, resolved the way the teacher resolves its own
//! global config path, and `--create-default-config` installation.

use std::path::PathBuf;

use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

use crate::error::PromptError;

/// The built-in default document, shipped with the binary and installed
/// verbatim by `--create-default-config` (no commenting-out: unlike the
/// teacher's example config, this one is meant to be used as-is).
pub const DEFAULT_CONFIG: &str = include_str!("../../dev/default-config.yml");

/// `$XDG_CONFIG_HOME/pretty-git-prompt/config.yml`, falling back to
/// `~/.config/pretty-git-prompt/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("pretty-git-prompt").join("config.yml"))
}

/// Write the embedded default document to `path`, refusing to overwrite an
/// existing file.
pub fn install_default_config(path: &std::path::Path) -> Result<(), PromptError> {
    if path.exists() {
        return Err(PromptError::DefaultConfigExists { path: path.to_path_buf() });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| PromptError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(|source| PromptError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })
}
