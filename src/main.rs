//! reactor-aggregate - documentation aggregation for multi-module builds
//!
//! Reads a reactor manifest, aggregates the sources of every module through an
//! external generator and publishes the result into a downstream module.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Install the stderr subscriber
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the level from warnings to
/// info, `-vv` to debug.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

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
        Commands::Run(args) => commands::run::run(&cli.manifest, args),
        Commands::Sources(args) => commands::sources::run(&cli.manifest, args),
        Commands::Resolve(args) => commands::resolve::run(&cli.manifest, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
