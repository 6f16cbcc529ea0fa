use clap::Parser;
use std::path::PathBuf;

use reactor_aggregate::config::AggregateConfig;
use reactor_aggregate::model::Coordinate;

/// Arguments for the run command
///
/// Every option overrides the matching value of the manifest's `aggregate`
/// section. Relative paths given here are relative to the current directory.
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Aggregate with the command from reactor.yaml:\n    reactor-aggregate run\n\n\
                  Aggregate with an explicit generator:\n    reactor-aggregate run -- docgen --quiet\n\n\
                  Publish into a module and fail if it is missing:\n    reactor-aggregate run --append-to web --strict\n\n\
                  Extract a frontend bundle first:\n    reactor-aggregate run --frontend-bundle org.example:console:2.1:zip\n\n\
                  Write the report as JSON:\n    reactor-aggregate run --json --report target/aggregate.json")]
pub struct RunArgs {
    /// Artifact id of the module receiving the aggregate
    #[arg(long, value_name = "MODULE")]
    pub append_to: Option<String>,

    /// Fail when the --append-to module is not part of the build
    #[arg(long)]
    pub strict: bool,

    /// Read the declared source roots instead of preprocessed sources
    #[arg(long)]
    pub no_preprocessed_sources: bool,

    /// Location of preprocessed sources, relative to each module
    #[arg(long, value_name = "PATH")]
    pub preprocessed_source_path: Option<PathBuf>,

    /// Archive to extract into the output directory before aggregating
    #[arg(long, value_name = "COORD")]
    pub frontend_bundle: Option<Coordinate>,

    /// Directory receiving the unpacked aggregate
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Local repository for dependencies outside the build
    #[arg(long, value_name = "DIR", env = "REACTOR_AGGREGATE_REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Format the report as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    /// Generator command line, program first
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl RunArgs {
    /// Apply the overrides on top of the manifest settings
    pub fn apply(&self, config: &mut AggregateConfig) {
        if let Some(target) = &self.append_to {
            config.append_to = Some(target.clone());
        }
        if self.strict {
            config.strict_publish = true;
        }
        if self.no_preprocessed_sources {
            config.include_preprocessed_sources = false;
        }
        if let Some(path) = &self.preprocessed_source_path {
            config.preprocessed_source_path = path.clone();
        }
        if let Some(bundle) = &self.frontend_bundle {
            config.frontend_bundle = Some(bundle.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(repository) = &self.repository {
            config.repository = Some(repository.clone());
        }
        if !self.command.is_empty() {
            config.command = self.command.clone();
        }
    }
}
