//! Reactor modules

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::artifact::Artifact;
use super::coordinate::Coordinate;
use super::resource::ResourceSet;

/// How a module is packaged
///
/// `pom` marks an aggregator-only module with no sources of its own. The
/// comparison is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Packaging {
    #[default]
    Jar,
    Pom,
    Other(String),
}

impl Packaging {
    pub fn is_aggregator(&self) -> bool {
        matches!(self, Packaging::Pom)
    }

    /// Extension of the module's main build output
    pub fn extension(&self) -> &str {
        match self {
            Packaging::Jar => "jar",
            Packaging::Pom => "pom",
            Packaging::Other(kind) => kind,
        }
    }
}

impl From<String> for Packaging {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "jar" => Packaging::Jar,
            "pom" => Packaging::Pom,
            _ => Packaging::Other(value),
        }
    }
}

impl From<&str> for Packaging {
    fn from(value: &str) -> Self {
        Packaging::from(value.to_string())
    }
}

impl From<Packaging> for String {
    fn from(packaging: Packaging) -> Self {
        packaging.to_string()
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One buildable unit of the reactor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,

    #[serde(default)]
    pub packaging: Packaging,

    /// Module directory; relative paths below are anchored here
    #[serde(default)]
    pub base_dir: PathBuf,

    /// Declared compile source roots, in declaration order
    #[serde(default)]
    pub source_roots: Vec<PathBuf>,

    #[serde(default)]
    pub dependencies: Vec<Coordinate>,

    /// Location of the module's main build output, once built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attached_artifacts: Vec<Artifact>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceSet>,
}

impl Module {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: Packaging::default(),
            base_dir: PathBuf::new(),
            source_roots: Vec::new(),
            dependencies: Vec::new(),
            artifact_file: None,
            attached_artifacts: Vec::new(),
            resources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_packaging(mut self, packaging: impl Into<Packaging>) -> Self {
        self.packaging = packaging.into();
        self
    }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    #[must_use]
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_roots.push(root.into());
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, coordinate: Coordinate) -> Self {
        self.dependencies.push(coordinate);
        self
    }

    #[must_use]
    pub fn with_artifact_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.artifact_file = Some(file.into());
        self
    }

    /// The module's main build output
    pub fn artifact(&self) -> Artifact {
        let artifact = Artifact::new(&self.group_id, &self.artifact_id, &self.version)
            .with_extension(self.packaging.extension());
        match &self.artifact_file {
            Some(file) => artifact.with_file(file),
            None => artifact,
        }
    }

    /// `group:artifact:version`
    pub fn id(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    pub fn add_resource(&mut self, resource: ResourceSet) {
        self.resources.push(resource);
    }

    pub fn add_attached_artifact(&mut self, artifact: Artifact) {
        self.attached_artifacts.push(artifact);
    }
}
