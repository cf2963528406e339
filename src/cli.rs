//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Git status and branch-divergence summary for shell prompts.
#[derive(Debug, Parser)]
#[command(name = "pretty-git-prompt", version, about, long_about = None)]
pub struct Args {
    /// Path to a configuration file. Defaults to
    /// `$XDG_CONFIG_HOME/pretty-git-prompt/config.yml` or
    /// `~/.config/pretty-git-prompt/config.yml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default configuration to the default config path and exit.
    #[arg(long)]
    pub create_default_config: bool,
}

/// Exit code for any fatal error reaching `main` (config load, I/O, ...).
/// clap's own parse failure (unrecognized flag, bad value, ...) exits with
/// code 2 before `main` ever runs, so this is the only other exit path.
pub const EXIT_CONFIG_ERROR: i32 = 1;
