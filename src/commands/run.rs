//! Run command implementation
//!
//! Loads the manifest, applies the CLI overrides and drives one aggregation
//! with the shipped collaborators: the local repository for dependencies
//! outside the build, the zip-based archivers and the command engine.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::RunArgs;
use crate::commands::helpers::load_reactor;
use reactor_aggregate::archive::ArchiverRegistry;
use reactor_aggregate::config::AggregateConfig;
use reactor_aggregate::engine::CommandEngine;
use reactor_aggregate::error::{
    Result,
    fs::{io_error, write_failed},
};
use reactor_aggregate::orchestrator::{Orchestrator, RunReport};
use reactor_aggregate::reactor::Reactor;
use reactor_aggregate::resolver::LocalRepository;

/// Run the aggregation described by the manifest
pub fn run(manifest: &Path, args: RunArgs) -> Result<()> {
    let (mut reactor, mut config) = load_reactor(manifest)?;
    args.apply(&mut config);
    config.validate()?;

    let report = execute(&mut reactor, &config)?;
    let rendered = render(&report, args.json)?;

    match &args.report {
        Some(path) => {
            fs::write(path, rendered)
                .map_err(|e| write_failed(path.display().to_string(), e.to_string()))?;
            info!(report = %path.display(), "Wrote run report");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Wire the shipped collaborators and run the orchestrator
pub fn execute(reactor: &mut Reactor, config: &AggregateConfig) -> Result<RunReport> {
    let repository = LocalRepository::new(config.repository_root()?);
    let engine = CommandEngine::new(&config.command, &config.build_dir)?;
    let archivers = ArchiverRegistry::with_defaults();

    Orchestrator::new(config, &archivers, &repository, &engine).run(reactor)
}

fn render(report: &RunReport, json: bool) -> Result<String> {
    if json {
        let mut text = serde_json::to_string_pretty(report)
            .map_err(|e| io_error(format!("Failed to render report: {e}")))?;
        text.push('\n');
        Ok(text)
    } else {
        serde_yaml::to_string(report).map_err(|e| io_error(format!("Failed to render report: {e}")))
    }
}
