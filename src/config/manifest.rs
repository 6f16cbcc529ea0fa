//! Reactor manifest (reactor.yaml)
//!
//! Describes the modules of one build and the aggregation settings:
//!
//! ```yaml
//! execution_root: parent
//! modules:
//!   - group_id: org.example
//!     artifact_id: parent
//!     version: 1.0.0
//!     packaging: pom
//!     base_dir: .
//!   - group_id: org.example
//!     artifact_id: core
//!     version: 1.0.0
//!     base_dir: core
//!     source_roots: [src/main/java]
//!     artifact_file: target/core-1.0.0.jar
//! aggregate:
//!   append_to: web
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::AggregateConfig;
use crate::error::{
    Result,
    config::{invalid, not_found, parse_failed, read_failed},
};
use crate::model::Module;
use crate::path_utils::resolve_against;
use crate::reactor::Reactor;

/// Default manifest file name
pub const MANIFEST_FILE: &str = "reactor.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReactorManifest {
    /// Artifact id of the module the aggregation runs from; the first module when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_root: Option<String>,

    /// In-build modules, in reactor order
    pub modules: Vec<Module>,

    #[serde(default)]
    pub aggregate: AggregateConfig,
}

impl ReactorManifest {
    /// Parse manifest text without touching the filesystem
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        Ok(manifest)
    }

    /// Load, anchor and validate the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        let mut manifest: Self = serde_yaml::from_str(&content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;

        let absolute = std::path::absolute(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        let manifest_dir = absolute
            .parent()
            .map_or_else(|| PathBuf::from("/"), Path::to_path_buf);
        manifest.anchor(&manifest_dir);
        manifest.validate()?;

        debug!(path = %path.display(), modules = manifest.modules.len(), "Loaded reactor manifest");
        Ok(manifest)
    }

    /// Make every relative path absolute
    ///
    /// Module directories are relative to the manifest. Source roots and
    /// artifact files are relative to their module. Output and build
    /// directories are relative to the execution root module.
    pub fn anchor(&mut self, manifest_dir: &Path) {
        for module in &mut self.modules {
            module.base_dir = resolve_against(manifest_dir, &module.base_dir);
            let base = module.base_dir.clone();
            for root in &mut module.source_roots {
                *root = resolve_against(&base, root);
            }
            if let Some(file) = &module.artifact_file {
                module.artifact_file = Some(resolve_against(&base, file));
            }
        }

        let root_dir = self
            .root_module()
            .map_or_else(|| manifest_dir.to_path_buf(), |m| m.base_dir.clone());
        self.aggregate.anchor(&root_dir, manifest_dir);
    }

    pub fn validate(&self) -> Result<()> {
        if self.modules.is_empty() {
            return Err(invalid("the manifest declares no modules"));
        }

        let mut seen = HashSet::new();
        for module in &self.modules {
            if module.group_id.trim().is_empty() || module.artifact_id.trim().is_empty() {
                return Err(invalid("every module needs a group_id and an artifact_id"));
            }
            if !seen.insert((module.group_id.as_str(), module.artifact_id.as_str())) {
                return Err(invalid(format!(
                    "module {}:{} is declared twice",
                    module.group_id, module.artifact_id
                )));
            }
        }

        if let Some(root) = &self.execution_root {
            if self.root_module().is_none() {
                return Err(invalid(format!(
                    "execution_root '{root}' is not a declared module"
                )));
            }
        }

        self.aggregate.validate()
    }

    fn root_module(&self) -> Option<&Module> {
        match &self.execution_root {
            Some(name) => self.modules.iter().find(|m| &m.artifact_id == name),
            None => self.modules.first(),
        }
    }

    /// Split into the reactor and its aggregation settings
    pub fn into_reactor(self) -> Result<(Reactor, AggregateConfig)> {
        let reactor = match &self.execution_root {
            Some(root) => Reactor::with_root(self.modules, root)?,
            None => Reactor::new(self.modules)?,
        };
        Ok((reactor, self.aggregate))
    }
}
