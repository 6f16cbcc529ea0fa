//! Resolved artifacts

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, DEFAULT_EXTENSION};

/// An artifact with a known version and, once built or downloaded, a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Artifact {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
            extension: default_extension(),
            file: None,
        }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is the artifact produced under `classifier` for `version`
    ///
    /// Both fields must match: the version alone is shared by every artifact
    /// a module attaches in one build.
    pub fn is_produced(&self, classifier: &str, version: &str) -> bool {
        self.classifier.as_deref() == Some(classifier) && self.version == version
    }

    /// Conventional file name, e.g. `core-1.0-docs.jar`
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact_id, self.version, classifier, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact_id, self.version, self.extension),
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn coordinate(&self) -> Coordinate {
        let coordinate = Coordinate::new(&self.group_id, &self.artifact_id)
            .with_version(&self.version)
            .with_extension(&self.extension);
        match &self.classifier {
            Some(classifier) => coordinate.with_classifier(classifier),
            None => coordinate,
        }
    }
}
