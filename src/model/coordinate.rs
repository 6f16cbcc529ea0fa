//! Dependency coordinates
//!
//! Textual form: `group:artifact[:version[:extension[:classifier]]]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AggregateError, Result, config::invalid_coordinate};

/// Extension used when a coordinate does not name one
pub const DEFAULT_EXTENSION: &str = "jar";

/// A dependency coordinate
///
/// Only `group_id` and `artifact_id` take part in reactor matching. The other
/// fields are needed when the coordinate has to be looked up in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub extension: String,
    pub classifier: Option<String>,
}

impl Coordinate {
    /// Create a versionless coordinate
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            extension: DEFAULT_EXTENSION.to_string(),
            classifier: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Whether this coordinate names the given group and artifact
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id
    }
}

impl FromStr for Coordinate {
    type Err = AggregateError;

    fn from_str(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.trim().split(':').collect();
        if parts.len() < 2 || parts.len() > 5 {
            return Err(invalid_coordinate(
                input,
                "expected group:artifact[:version[:extension[:classifier]]]",
            ));
        }
        if parts[0].is_empty() {
            return Err(invalid_coordinate(input, "missing group id"));
        }
        if parts[1].is_empty() {
            return Err(invalid_coordinate(input, "missing artifact id"));
        }

        let optional = |index: usize| {
            parts
                .get(index)
                .filter(|part| !part.is_empty())
                .map(|part| (*part).to_string())
        };

        Ok(Self {
            group_id: parts[0].to_string(),
            artifact_id: parts[1].to_string(),
            version: optional(2),
            extension: optional(3).unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            classifier: optional(4),
        })
    }
}

impl TryFrom<String> for Coordinate {
    type Error = AggregateError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;

        let version = self.version.as_deref().unwrap_or("");
        match &self.classifier {
            Some(classifier) => write!(f, ":{}:{}:{}", version, self.extension, classifier),
            None if self.extension != DEFAULT_EXTENSION => {
                write!(f, ":{}:{}", version, self.extension)
            }
            None if !version.is_empty() => write!(f, ":{}", version),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_and_artifact() {
        let coordinate: Coordinate = "org.x:core".parse().unwrap();
        assert_eq!(coordinate.group_id, "org.x");
        assert_eq!(coordinate.artifact_id, "core");
        assert_eq!(coordinate.version, None);
        assert_eq!(coordinate.extension, "jar");
        assert_eq!(coordinate.classifier, None);
    }

    #[test]
    fn test_parse_full_coordinate() {
        let coordinate: Coordinate = "org.x:console:2.1:zip:frontend".parse().unwrap();
        assert_eq!(coordinate.version.as_deref(), Some("2.1"));
        assert_eq!(coordinate.extension, "zip");
        assert_eq!(coordinate.classifier.as_deref(), Some("frontend"));
    }

    #[test]
    fn test_parse_rejects_missing_parts() {
        assert!("org.x".parse::<Coordinate>().is_err());
        assert!(":core".parse::<Coordinate>().is_err());
        assert!("org.x:".parse::<Coordinate>().is_err());
        assert!("a:b:c:d:e:f".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_display_is_parseable() {
        for text in [
            "org.x:core",
            "org.x:core:1.0",
            "org.x:core:1.0:zip",
            "org.x:core:1.0:jar:sources",
        ] {
            let coordinate: Coordinate = text.parse().unwrap();
            assert_eq!(coordinate.to_string(), text);
        }
    }

    #[test]
    fn test_display_without_version_keeps_classifier() {
        let coordinate = Coordinate::new("org.x", "core").with_classifier("docs");
        assert_eq!(coordinate.to_string(), "org.x:core::jar:docs");
        let reparsed: Coordinate = coordinate.to_string().parse().unwrap();
        assert_eq!(reparsed, coordinate);
    }

    #[test]
    fn test_matches_ignores_version() {
        let coordinate = Coordinate::new("org.x", "core").with_version("0.9");
        assert!(coordinate.matches("org.x", "core"));
        assert!(!coordinate.matches("org.y", "core"));
        assert!(!coordinate.matches("org.x", "web"));
    }

    #[test]
    fn test_deserialize_from_yaml_string() {
        let coordinate: Coordinate = serde_yaml::from_str("\"org.x:core:1.0\"").unwrap();
        assert_eq!(coordinate.version.as_deref(), Some("1.0"));
    }
}
