//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - run: Run command arguments and configuration overrides
//! - sources: Sources command arguments
//! - resolve: Resolve command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use reactor_aggregate::config::MANIFEST_FILE;

pub mod completions;
pub mod resolve;
pub mod run;
pub mod sources;

pub use completions::CompletionsArgs;
pub use resolve::ResolveArgs;
pub use run::RunArgs;
pub use sources::SourcesArgs;

/// reactor-aggregate - documentation aggregation for multi-module builds
#[derive(Parser, Debug)]
#[command(
    name = "reactor-aggregate",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Aggregate documentation across the modules of a build",
    long_about = "Runs a documentation generator over every module of a multi-module build, \
                  preferring preprocessed sources and in-build artifacts, and publishes the \
                  result into a downstream module.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  reactor-aggregate run -- docgen            \x1b[90m# Aggregate with the docgen command\x1b[0m\n   \
                  reactor-aggregate run --append-to web      \x1b[90m# Publish into module 'web'\x1b[0m\n   \
                  reactor-aggregate sources core             \x1b[90m# Show effective source roots\x1b[0m\n   \
                  reactor-aggregate resolve org.x:core:1.0   \x1b[90m# Resolve a dependency\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Reactor manifest
    #[arg(
        long,
        short = 'm',
        global = true,
        env = "REACTOR_AGGREGATE_MANIFEST",
        default_value = MANIFEST_FILE
    )]
    pub manifest: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the frontend, run the aggregation and publish the result
    Run(RunArgs),

    /// Show effective source roots
    Sources(SourcesArgs),

    /// Resolve a dependency coordinate
    Resolve(ResolveArgs),

    /// Show the version and the defaults a run uses
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
