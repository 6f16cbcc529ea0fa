//! Effective source roots
//!
//! A module may declare its canonical source root (e.g. `src/main/java`)
//! while a preprocessing step writes a generated variant elsewhere. When
//! substitution is enabled the generated variant replaces the canonical root
//! so the same sources are never read twice.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::model::Module;

/// Canonical source path a substitution looks for
pub const DEFAULT_CANONICAL_SOURCE_PATH: &str = "src/main/java";

/// Where preprocessed sources are expected, relative to the module
pub const DEFAULT_PREPROCESSED_SOURCE_PATH: &str = "target/generated-sources/delombok";

/// Supplies the source roots the aggregation engine reads for a module
pub trait SourceRootProvider {
    fn source_roots(&self, module: &Module) -> Vec<PathBuf>;
}

/// Replace a canonical trailing path with a preprocessed location
///
/// The replacement is joined onto whatever precedes the suffix, so a relative
/// replacement lands inside the same module and an absolute one is used as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    suffix: PathBuf,
    replacement: PathBuf,
}

impl SubstitutionRule {
    pub fn new(suffix: impl Into<PathBuf>, replacement: impl Into<PathBuf>) -> Self {
        Self {
            suffix: suffix.into(),
            replacement: replacement.into(),
        }
    }

    /// Apply the rule to one root, or `None` when the root does not end with the suffix
    pub fn apply(&self, root: &Path) -> Option<PathBuf> {
        let depth = self.suffix.components().count();
        if depth == 0 || !root.ends_with(&self.suffix) {
            return None;
        }
        let prefix = root.ancestors().nth(depth)?;
        Some(prefix.join(&self.replacement))
    }
}

impl Default for SubstitutionRule {
    fn default() -> Self {
        Self::new(
            DEFAULT_CANONICAL_SOURCE_PATH,
            DEFAULT_PREPROCESSED_SOURCE_PATH,
        )
    }
}

/// Source-root provider backed by an optional substitution rule
///
/// The default substitutes with [`SubstitutionRule::default`].
#[derive(Debug, Clone)]
pub struct SourceRoots {
    rule: Option<SubstitutionRule>,
}

impl Default for SourceRoots {
    fn default() -> Self {
        Self::substituting(SubstitutionRule::default())
    }
}

impl SourceRoots {
    /// Roots with the canonical path swapped for its preprocessed variant
    pub fn substituting(rule: SubstitutionRule) -> Self {
        Self { rule: Some(rule) }
    }

    /// Declared roots, untouched
    pub fn declared() -> Self {
        Self { rule: None }
    }
}

impl SourceRootProvider for SourceRoots {
    fn source_roots(&self, module: &Module) -> Vec<PathBuf> {
        effective_source_roots(module, self.rule.as_ref())
    }
}

/// Compute the source roots to feed the aggregation for one module
///
/// Aggregator-only modules contribute nothing. Without a rule the declared
/// roots come back in declaration order. With a rule each root is either
/// replaced or kept, never both. A path is listed once, at its first position.
pub fn effective_source_roots(module: &Module, rule: Option<&SubstitutionRule>) -> Vec<PathBuf> {
    if module.packaging.is_aggregator() || module.source_roots.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut roots = Vec::with_capacity(module.source_roots.len());
    for root in &module.source_roots {
        let effective = rule
            .and_then(|rule| rule.apply(root))
            .unwrap_or_else(|| root.clone());
        if !seen.insert(effective.clone()) {
            debug!(module = %module.artifact_id, root = %effective.display(), "Source root already listed");
            continue;
        }
        info!(module = %module.artifact_id, root = %effective.display(), "Added source root");
        roots.push(effective);
    }
    roots
}
