//! Resource-set descriptors consumed by a module's packaging step

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{Result, fs::read_failed};
use crate::path_utils::{matches_any, to_forward_slashes};

/// A directory plus include/exclude filters describing files to bundle
///
/// Contents are copied verbatim, so `filtering` is always false for sets
/// built by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSet {
    pub directory: PathBuf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
    #[serde(default)]
    pub filtering: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_path: Option<PathBuf>,
}

/// A file selected by a [`ResourceSet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub source: PathBuf,
    /// Location inside the packaged output
    pub target: PathBuf,
}

impl ResourceSet {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
            filtering: false,
            target_path: None,
        }
    }

    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.includes.push(pattern.into());
        self
    }

    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    #[must_use]
    pub fn target_path(mut self, target: impl Into<PathBuf>) -> Self {
        self.target_path = Some(target.into());
        self
    }

    /// Whether a path relative to `directory` belongs to this set
    ///
    /// An empty include list takes everything; excludes always win.
    pub fn matches(&self, relative_path: &str) -> bool {
        let included = self.includes.is_empty() || matches_any(&self.includes, relative_path);
        included && !matches_any(&self.excludes, relative_path)
    }

    /// Files this set selects, with their packaged locations
    ///
    /// A missing directory selects nothing.
    pub fn collect(&self) -> Result<Vec<ResourceEntry>> {
        if !self.directory.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.directory).sort_by_file_name() {
            let entry = entry
                .map_err(|e| read_failed(self.directory.display().to_string(), e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = relative_to(entry.path(), &self.directory);
            if !self.matches(&to_forward_slashes(&relative)) {
                continue;
            }

            let target = match &self.target_path {
                Some(mount) => mount.join(&relative),
                None => relative,
            };
            entries.push(ResourceEntry {
                source: entry.path().to_path_buf(),
                target,
            });
        }

        Ok(entries)
    }
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}
