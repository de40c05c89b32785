//! Metalint CLI - checker aggregation front end

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use metalint_cli::{commands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr and only exist in debug mode.
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Off
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let result = match &cli.command {
        Some(Commands::Init { path }) => commands::init::run(path.as_deref()),
        Some(Commands::Tools) => commands::tools::run(&cli),
        Some(Commands::Run { path }) => commands::run::run(path.as_deref(), &cli),
        None => commands::run::run(None, &cli),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
