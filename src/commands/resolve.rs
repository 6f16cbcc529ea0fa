//! Resolve command implementation

use std::path::Path;

use tracing::debug;

use crate::cli::ResolveArgs;
use crate::commands::helpers::load_reactor;
use reactor_aggregate::error::Result;
use reactor_aggregate::model::Artifact;
use reactor_aggregate::resolver::{DependencyResolver, LocalRepository, ReactorResolver};

/// Resolve a coordinate the way the aggregation engine would
pub fn run(manifest: &Path, args: ResolveArgs) -> Result<()> {
    let (reactor, config) = load_reactor(manifest)?;
    let root = match args.repository {
        Some(root) => root,
        None => config.repository_root()?,
    };

    let repository = LocalRepository::new(root);
    debug!(repository = %repository.root().display(), coordinate = %args.coordinate, "Resolving");
    let resolver = ReactorResolver::new(reactor.modules(), &repository);
    let artifact = resolver.resolve(&args.coordinate)?;

    println!("{}", describe(&artifact));
    Ok(())
}

fn describe(artifact: &Artifact) -> String {
    match artifact.file() {
        Some(file) => file.display().to_string(),
        None => format!("{} (in build, not built yet)", artifact.coordinate()),
    }
}
