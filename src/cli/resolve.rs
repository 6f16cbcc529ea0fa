use clap::Parser;
use std::path::PathBuf;

use reactor_aggregate::model::Coordinate;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve an in-build module:\n    reactor-aggregate resolve org.example:core\n\n\
                  Resolve from the local repository:\n    reactor-aggregate resolve org.slf4j:slf4j-api:2.0.9\n\n\
                  Resolve a zip bundle:\n    reactor-aggregate resolve org.example:console:2.1:zip")]
pub struct ResolveArgs {
    /// Coordinate as group:artifact[:version[:extension[:classifier]]]
    pub coordinate: Coordinate,

    /// Local repository for artifacts outside the reactor
    #[arg(long, env = "REACTOR_AGGREGATE_REPOSITORY")]
    pub repository: Option<PathBuf>,
}
