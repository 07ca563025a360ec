//! Marklint CLI entry point

use clap::Parser;
use marklint::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let exit_code = match cli.command {
        Command::Check {
            paths,
            format,
            config,
        } => marklint::cli::check::run_check(&paths, format, config.as_deref(), cli.color),
        Command::Init { force } => marklint::cli::init::run_init(force),
        Command::List { format, config } => {
            marklint::cli::list::run_list(format, config.as_deref())
        }
    };

    process::exit(exit_code);
}
