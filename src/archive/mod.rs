//! Archive extraction
//!
//! This module handles:
//! - Looking up an extraction handler by archive format
//! - Extracting an archive into an existing directory
//! - Skipping entries that match exclude globs
//!
//! Extraction is not transactional: when it fails part-way, whatever was
//! already written stays in the destination and the directory must be treated
//! as unusable.

mod zip_archiver;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{
    Result,
    archive::{missing_destination, no_handler},
};
use crate::path_utils::validate_globs;

pub use zip_archiver::ZipUnArchiver;

/// Counts reported by a finished extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractSummary {
    pub extracted: usize,
    pub skipped: usize,
}

/// Extracts one archive format
pub trait UnArchiver {
    /// Write every entry not matching `excludes` below `destination`
    fn extract(
        &self,
        archive: &Path,
        destination: &Path,
        excludes: &[String],
    ) -> Result<ExtractSummary>;
}

/// Extraction handlers keyed by format name
#[derive(Default)]
pub struct ArchiverRegistry {
    handlers: BTreeMap<String, Box<dyn UnArchiver>>,
}

impl ArchiverRegistry {
    /// A registry without any handler
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry handling `jar` and `zip`
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("jar", Box::new(ZipUnArchiver));
        registry.register("zip", Box::new(ZipUnArchiver));
        registry
    }

    pub fn register(&mut self, format: impl Into<String>, handler: Box<dyn UnArchiver>) {
        self.handlers
            .insert(format.into().to_ascii_lowercase(), handler);
    }

    /// The handler for `format`
    pub fn lookup(&self, format: &str) -> Result<&dyn UnArchiver> {
        match self.handlers.get(&format.to_ascii_lowercase()) {
            Some(handler) => Ok(&**handler),
            None => {
                let known: Vec<&str> = self.formats().collect();
                debug!(format, known = ?known, "No archive handler");
                Err(no_handler(format))
            }
        }
    }

    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

/// Archive format derived from the file type
pub fn format_of(archive: &Path) -> Option<String> {
    archive
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Extract `archive` into `destination`, skipping excluded entries
///
/// The destination must already be a directory. Nothing is written when the
/// destination is missing, the format has no handler or an exclude pattern
/// does not compile.
pub fn extract(
    registry: &ArchiverRegistry,
    archive: &Path,
    destination: &Path,
    excludes: &[String],
) -> Result<ExtractSummary> {
    if !destination.is_dir() {
        return Err(missing_destination(destination.display().to_string()));
    }
    validate_globs(excludes)?;

    let format = format_of(archive).unwrap_or_default();
    let handler = registry.lookup(&format)?;

    let summary = handler.extract(archive, destination, excludes)?;
    info!(
        archive = %archive.display(),
        destination = %destination.display(),
        extracted = summary.extracted,
        skipped = summary.skipped,
        "Extracted archive"
    );
    Ok(summary)
}
