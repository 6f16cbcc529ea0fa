//! Publishing the aggregate into a downstream module
//!
//! The output directory holds two kinds of content: the browsable frontend
//! and a pair of compatibility schema files. The target module receives one
//! resource set for each, plus the aggregated artifact itself.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{Result, publish::target_not_found};
use crate::model::{Artifact, ResourceSet};
use crate::reactor::Reactor;

/// Plain-text summary kept out of every published resource set
pub const SUMMARY_FILE: &str = "summary.txt";

/// Compatibility schema pair, published unrelocated
pub const SCHEMA_FILES: [&str; 2] = [
    "schema/compatibility.xsd",
    "schema/compatibility-strict.xsd",
];

/// Where the frontend is mounted inside the target's packaged output
pub const WEB_MOUNT_PATH: &str = "META-INF/resources/docbundle";

/// What was attached to which module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub module: String,
    pub resources: Vec<ResourceSet>,
    pub artifact: Artifact,
}

/// Attaches the aggregate to the configured target module
#[derive(Debug, Clone)]
pub struct ResourcePublisher {
    output_dir: PathBuf,
    target: Option<String>,
    strict: bool,
}

impl ResourcePublisher {
    pub fn new(output_dir: impl Into<PathBuf>, target: Option<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            target,
            strict: false,
        }
    }

    /// Fail instead of skipping when the target is not in the reactor
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Attach the resource sets and `artifact` to the target module
    ///
    /// Returns `None` when no target is configured, or when the target is not
    /// part of the reactor and strict mode is off. A partial build may
    /// legitimately leave the target out.
    pub fn publish(
        &self,
        reactor: &mut Reactor,
        artifact: &Artifact,
    ) -> Result<Option<Publication>> {
        let Some(target) = self.target.as_deref() else {
            return Ok(None);
        };

        let Some(module) = reactor.find_mut(target) else {
            if self.strict {
                return Err(target_not_found(target));
            }
            info!(module = target, "Target module not in reactor, nothing to publish");
            return Ok(None);
        };

        info!(artifact = ?artifact.file(), module = %module.id(), "Publishing aggregate");
        let resources = resource_sets(&self.output_dir);
        for resource in &resources {
            info!(
                module = %module.artifact_id,
                directory = %resource.directory.display(),
                includes = ?resource.includes,
                excludes = ?resource.excludes,
                target_path = ?resource.target_path,
                "Added resource set"
            );
            module.add_resource(resource.clone());
        }
        module.add_attached_artifact(artifact.clone());

        Ok(Some(Publication {
            module: module.artifact_id.clone(),
            resources,
            artifact: artifact.clone(),
        }))
    }
}

/// The frontend and schema resource sets rooted at `output_dir`
pub fn resource_sets(output_dir: &Path) -> Vec<ResourceSet> {
    let frontend = ResourceSet::new(output_dir)
        .exclude(SUMMARY_FILE)
        .target_path(WEB_MOUNT_PATH);

    let schemas = SCHEMA_FILES
        .iter()
        .fold(ResourceSet::new(output_dir), |set, file| set.include(*file))
        .exclude(SUMMARY_FILE);

    vec![frontend, schemas]
}
