use std::process;

use clap::Parser;
use pretty_git_prompt::cli::{Args, EXIT_CONFIG_ERROR};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "warn")).init();

    let args = Args::parse();

    let result = if args.create_default_config {
        pretty_git_prompt::create_default_config(args.config.as_deref()).map(|path| {
            log::info!("wrote default config to {}", path.display());
            String::new()
        })
    } else {
        let cwd = match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                eprintln!("pretty-git-prompt: could not determine current directory: {e}");
                process::exit(EXIT_CONFIG_ERROR);
            }
        };
        pretty_git_prompt::run(args.config.as_deref(), &cwd)
    };

    match result {
        Ok(rendered) => {
            if let Err(e) = pretty_git_prompt::emitter::emit(&rendered, std::io::stdout()) {
                eprintln!("pretty-git-prompt: {e}");
                process::exit(EXIT_CONFIG_ERROR);
            }
        }
        Err(e) => {
            eprintln!("pretty-git-prompt: {e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
    }
}
