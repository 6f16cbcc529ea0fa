//! Local repository resolution
//!
//! Artifacts live at
//! `<root>/<group as path>/<artifact>/<version>/<artifact>-<version>[-<classifier>].<ext>`.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::DependencyResolver;
use crate::error::{
    Result,
    resolve::{failed, not_found},
};
use crate::model::{Artifact, Coordinate};

/// Default repository location under the user's home directory
pub fn default_repository_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".m2").join("repository"))
}

/// External resolver over a repository directory
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `artifact` is stored in this repository
    pub fn path_of(&self, artifact: &Artifact) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(artifact.group_id.split('.'));
        path.push(&artifact.artifact_id);
        path.push(&artifact.version);
        path.push(artifact.file_name());
        path
    }
}

impl DependencyResolver for LocalRepository {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Artifact> {
        let Some(version) = &coordinate.version else {
            return Err(failed(
                coordinate.to_string(),
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "a version is required outside the reactor",
                ),
            ));
        };

        let mut artifact = Artifact::new(&coordinate.group_id, &coordinate.artifact_id, version)
            .with_extension(&coordinate.extension);
        if let Some(classifier) = &coordinate.classifier {
            artifact = artifact.with_classifier(classifier);
        }

        let path = self.path_of(&artifact);
        match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {
                debug!(%coordinate, path = %path.display(), "Resolved from repository");
                Ok(artifact.with_file(path))
            }
            Ok(_) => Err(not_found(coordinate.to_string(), path.display().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(not_found(coordinate.to_string(), path.display().to_string()))
            }
            Err(e) => Err(failed(coordinate.to_string(), e)),
        }
    }
}
