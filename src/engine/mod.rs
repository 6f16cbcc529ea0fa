//! Aggregation engines
//!
//! The engine does the actual content generation. It receives the source-root
//! provider and the dependency resolver as injected capabilities and may
//! consult both for every module of the reactor.

pub mod command;
pub mod package;

use std::path::Path;

use crate::error::Result;
use crate::model::{Artifact, Module};
use crate::resolver::DependencyResolver;
use crate::sources::SourceRootProvider;

pub use command::CommandEngine;

/// Everything an engine may read during one aggregation
pub struct AggregationRequest<'a> {
    /// Every in-build module, in reactor order
    pub modules: &'a [Module],
    /// The module the aggregation is invoked on
    pub root: &'a Module,
    /// Where the unpacked aggregate is written
    pub output_dir: &'a Path,
    /// Classifier the produced artifact must carry
    pub classifier: &'a str,
    pub sources: &'a dyn SourceRootProvider,
    pub dependencies: &'a dyn DependencyResolver,
}

/// Produces the aggregated artifact
pub trait AggregationEngine {
    /// Run the aggregation and return the artifacts to attach to the root module
    fn aggregate(&self, request: &AggregationRequest<'_>) -> Result<Vec<Artifact>>;
}
