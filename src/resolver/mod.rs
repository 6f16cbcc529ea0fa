//! Dependency resolution against the reactor
//!
//! This module handles:
//! - Matching a coordinate to an in-build module by group and artifact id
//! - Falling back to an external resolver for everything else

pub mod repository;

use tracing::debug;

use crate::error::Result;
use crate::model::{Artifact, Coordinate, Module};

pub use repository::LocalRepository;

/// Resolves a coordinate to an artifact
pub trait DependencyResolver {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Artifact>;
}

/// Resolver preferring the reactor's own build output
///
/// The first module whose group and artifact id match wins. The declared
/// version is not compared: the module's current output is authoritative.
pub struct ReactorResolver<'a> {
    modules: &'a [Module],
    external: &'a dyn DependencyResolver,
}

impl<'a> ReactorResolver<'a> {
    pub fn new(modules: &'a [Module], external: &'a dyn DependencyResolver) -> Self {
        Self { modules, external }
    }

    /// The in-build module producing this coordinate, if any
    pub fn find_module(&self, coordinate: &Coordinate) -> Option<&'a Module> {
        self.modules
            .iter()
            .find(|module| coordinate.matches(&module.group_id, &module.artifact_id))
    }
}

impl DependencyResolver for ReactorResolver<'_> {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Artifact> {
        if let Some(module) = self.find_module(coordinate) {
            debug!(%coordinate, module = %module.id(), "Resolved from reactor");
            return Ok(module.artifact());
        }

        // Failures come back untouched; resolution is deterministic within a build.
        self.external.resolve(coordinate)
    }
}
