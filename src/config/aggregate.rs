//! Aggregation settings (the `aggregate` section of reactor.yaml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config::invalid};
use crate::model::Coordinate;
use crate::path_utils::resolve_against;
use crate::resolver::repository::default_repository_root;
use crate::sources::{
    DEFAULT_CANONICAL_SOURCE_PATH, DEFAULT_PREPROCESSED_SOURCE_PATH, SourceRoots,
    SubstitutionRule,
};

/// Output directory for the unpacked aggregate, relative to the execution root
pub const DEFAULT_OUTPUT_DIR: &str = "target/docbundle";

/// Directory the packaged aggregate is written to, relative to the execution root
pub const DEFAULT_BUILD_DIR: &str = "target";

/// Aggregation settings
///
/// Every field has a default, so an empty section is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregateConfig {
    /// Prefer preprocessed sources over the canonical source root
    pub include_preprocessed_sources: bool,

    /// Replacement for the canonical source path
    pub preprocessed_source_path: PathBuf,

    /// Trailing source path that gets replaced
    pub canonical_source_path: PathBuf,

    /// Artifact id of the module receiving the aggregate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_to: Option<String>,

    /// Archive extracted into the output directory before aggregating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend_bundle: Option<Coordinate>,

    pub output_dir: PathBuf,

    pub build_dir: PathBuf,

    /// Fail when `append_to` names a module outside the reactor
    pub strict_publish: bool,

    /// Generator command line, program first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    /// Local repository for dependencies outside the reactor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<PathBuf>,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            include_preprocessed_sources: true,
            preprocessed_source_path: PathBuf::from(DEFAULT_PREPROCESSED_SOURCE_PATH),
            canonical_source_path: PathBuf::from(DEFAULT_CANONICAL_SOURCE_PATH),
            append_to: None,
            frontend_bundle: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            strict_publish: false,
            command: Vec::new(),
            repository: None,
        }
    }
}

impl AggregateConfig {
    /// Source-root provider for these settings
    pub fn source_roots(&self) -> SourceRoots {
        if self.include_preprocessed_sources {
            SourceRoots::substituting(SubstitutionRule::new(
                &self.canonical_source_path,
                &self.preprocessed_source_path,
            ))
        } else {
            SourceRoots::declared()
        }
    }

    /// Configured repository, or the default one under the home directory
    pub fn repository_root(&self) -> Result<PathBuf> {
        self.repository
            .clone()
            .or_else(default_repository_root)
            .ok_or_else(|| invalid("no repository configured and no home directory found"))
    }

    /// Anchor relative directories
    ///
    /// Output and build directories belong to the execution root; the
    /// repository is relative to the manifest.
    pub fn anchor(&mut self, root_dir: &Path, manifest_dir: &Path) {
        self.output_dir = resolve_against(root_dir, &self.output_dir);
        self.build_dir = resolve_against(root_dir, &self.build_dir);
        if let Some(repository) = &self.repository {
            self.repository = Some(resolve_against(manifest_dir, repository));
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.include_preprocessed_sources {
            if self.canonical_source_path.as_os_str().is_empty() {
                return Err(invalid("canonical_source_path must not be empty"));
            }
            if self.canonical_source_path.is_absolute() {
                return Err(invalid(format!(
                    "canonical_source_path must be relative, got {}",
                    self.canonical_source_path.display()
                )));
            }
            if self.preprocessed_source_path.as_os_str().is_empty() {
                return Err(invalid("preprocessed_source_path must not be empty"));
            }
        }
        if self
            .append_to
            .as_deref()
            .is_some_and(|target| target.trim().is_empty())
        {
            return Err(invalid("append_to must name a module"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(invalid("output_dir must not be empty"));
        }
        let output =
            std::path::absolute(&self.output_dir).unwrap_or_else(|_| self.output_dir.clone());
        let build =
            std::path::absolute(&self.build_dir).unwrap_or_else(|_| self.build_dir.clone());
        if build.starts_with(&output) {
            return Err(invalid(format!(
                "build_dir {} must not be inside output_dir {}",
                self.build_dir.display(),
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}
