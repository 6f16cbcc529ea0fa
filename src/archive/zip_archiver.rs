//! Jar/zip extraction

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use super::{ExtractSummary, UnArchiver};
use crate::error::{
    Result,
    archive::{extraction_failed, unsafe_entry},
    fs::write_failed,
};
use crate::path_utils::{matches_any, to_forward_slashes};

/// Handler for zip-based formats (`jar`, `zip`)
///
/// Directories are created as needed for the files written below them, so an
/// excluded directory never appears in the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipUnArchiver;

impl UnArchiver for ZipUnArchiver {
    fn extract(
        &self,
        archive: &Path,
        destination: &Path,
        excludes: &[String],
    ) -> Result<ExtractSummary> {
        let archive_name = archive.display().to_string();
        let file =
            File::open(archive).map_err(|e| extraction_failed(&archive_name, e.to_string()))?;
        let mut zip = ZipArchive::new(BufReader::new(file))
            .map_err(|e| extraction_failed(&archive_name, e.to_string()))?;

        let mut summary = ExtractSummary::default();
        for index in 0..zip.len() {
            let mut entry = zip
                .by_index(index)
                .map_err(|e| extraction_failed(&archive_name, e.to_string()))?;
            if entry.is_dir() {
                continue;
            }

            let Some(relative) = entry.enclosed_name() else {
                return Err(unsafe_entry(&archive_name, entry.name()));
            };
            if matches_any(excludes, &to_forward_slashes(&relative)) {
                debug!(entry = %relative.display(), "Skipped excluded entry");
                summary.skipped += 1;
                continue;
            }

            let target = destination.join(&relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| write_failed(parent.display().to_string(), e.to_string()))?;
            }
            let mut out = File::create(&target)
                .map_err(|e| write_failed(target.display().to_string(), e.to_string()))?;
            io::copy(&mut entry, &mut out)
                .map_err(|e| extraction_failed(&archive_name, e.to_string()))?;
            summary.extracted += 1;
        }

        Ok(summary)
    }
}
