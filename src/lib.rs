//! Library surface: wires Repo Probe → Observations → Config Model →
//! Evaluator → Emitter together into a single [`run`] call, consumed by both
//! the binary and the integration tests.

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod eval;
pub mod git;

use std::path::Path;

pub use error::PromptError;

/// Render the prompt string for the repository enclosing `cwd`, using the
/// config resolved from `explicit_config_path` (or the default location, or
/// the built-in default document).
///
/// Returns `Ok("")` rather than an error when there is no enclosing
/// repository — per the contract, an absent repository is not a failure.
///
/// # Errors
/// Propagates a [`PromptError`] (via `anyhow`) on any config syntax, schema,
/// or I/O failure. Observation-level failures never reach here; they are
/// recovered locally and folded into sentinel values.
pub fn run(explicit_config_path: Option<&Path>, cwd: &Path) -> anyhow::Result<String> {
    let document = config::load(explicit_config_path)?;

    let mut repo = git::probe(cwd);
    let observations = repo.as_mut().map(git::Observations::gather);

    Ok(eval::eval_document(&document.values, repo.as_ref(), observations.as_ref()))
}

/// Install the embedded default config at `explicit_path`, or the default
/// config location if none was given.
///
/// # Errors
/// Returns an error if the target path already has a file, if the default
/// config path cannot be determined, or on any I/O failure writing it.
pub fn create_default_config(explicit_path: Option<&Path>) -> anyhow::Result<std::path::PathBuf> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => config::default::default_config_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine default config path"))?,
    };
    config::default::install_default_config(&path)?;
    Ok(path)
}
