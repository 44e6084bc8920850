//! dmdiag - dependency manager diagnostics
//!
//! Lists the components of a dependency manager registry snapshot and
//! explains which missing services and configurations keep components down.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod graph;
mod matcher;
mod operations;
mod resolver;
mod snapshot;
mod ui;

use cli::{Cli, Commands};

/// Environment variable holding a full log filter directive
const LOG_ENV: &str = "DMDIAG_LOG";

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "dmdiag=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(&cli.snapshot, args),
        Commands::Wtf(args) => commands::wtf::run(&cli.snapshot, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("Help: {}", help);
        }
        std::process::exit(1);
    }
}
