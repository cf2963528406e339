//! Configuration loading: locate a YAML document (explicit path, default
//! path, or the built-in default), parse it, validate its schema, and
//! resolve color tokens — producing the [`node::Node`] tree the evaluator
//! walks.

pub mod color;
pub mod default;
pub mod node;

use std::path::{Path, PathBuf};

pub use node::{ConfigDocument, Node, SeparatorDisplay};

use crate::error::PromptError;

const SUPPORTED_VERSION: &str = "1";

/// Load and validate the config tree.
///
/// - `explicit_path`: the `--config PATH` argument, if given. An I/O error
///   reading this path is fatal.
/// - Otherwise falls back to `default::default_config_path()`. A missing
///   file there is not an error — it behaves as if the built-in default
///   document were loaded.
pub fn load(explicit_path: Option<&Path>) -> Result<ConfigDocument, PromptError> {
    let source = read_source(explicit_path)?;
    parse(&source.text, &source.path)
}

struct Source {
    text: String,
    path: PathBuf,
}

fn read_source(explicit_path: Option<&Path>) -> Result<Source, PromptError> {
    if let Some(path) = explicit_path {
        let text = std::fs::read_to_string(path).map_err(|source| PromptError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(Source {
            text,
            path: path.to_path_buf(),
        });
    }

    match default::default_config_path() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Source { text, path }),
            Err(_) => Ok(Source {
                text: default::DEFAULT_CONFIG.to_string(),
                path,
            }),
        },
        None => Ok(Source {
            text: default::DEFAULT_CONFIG.to_string(),
            path: PathBuf::from("<built-in default>"),
        }),
    }
}

fn parse(text: &str, path: &Path) -> Result<ConfigDocument, PromptError> {
    let mut document: ConfigDocument =
        serde_yaml::from_str(text).map_err(|source| PromptError::ConfigSyntax {
            path: path.to_path_buf(),
            source,
        })?;

    if document.version != SUPPORTED_VERSION {
        return Err(PromptError::ConfigSchema {
            path: path.to_path_buf(),
            message: format!(
                "unsupported config version {:?}, expected \"{SUPPORTED_VERSION}\"",
                document.version
            ),
        });
    }

    node::translate_colors(&mut document);
    Ok(document)
}
