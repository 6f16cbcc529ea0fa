//! Packaging an output directory into a jar

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{
    Result,
    fs::{read_failed, write_failed},
};
use crate::path_utils::to_forward_slashes;

/// Zip every file below `source` into `archive`, returning the entry count
///
/// Entry names are relative to `source` and use forward slashes. The parent
/// directory of `archive` is created when missing. The archive itself and
/// any path in `skip` are left out when they live below `source`.
pub fn pack_directory(source: &Path, archive: &Path, skip: &[&Path]) -> Result<usize> {
    let archive_name = archive.display().to_string();
    if let Some(parent) = archive.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(&archive_name, e.to_string()))?;
    }

    let file = File::create(archive).map_err(|e| write_failed(&archive_name, e.to_string()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    let mut count = 0;
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| read_failed(source.display().to_string(), e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path() == archive || skip.contains(&entry.path()) {
            debug!(path = %entry.path().display(), "Leaving out of the archive");
            continue;
        }

        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        writer
            .start_file(to_forward_slashes(relative), options)
            .map_err(|e| write_failed(&archive_name, e.to_string()))?;
        let mut input = File::open(entry.path())
            .map_err(|e| read_failed(entry.path().display().to_string(), e.to_string()))?;
        io::copy(&mut input, &mut writer).map_err(|e| write_failed(&archive_name, e.to_string()))?;
        count += 1;
    }

    writer
        .finish()
        .map_err(|e| write_failed(&archive_name, e.to_string()))?;
    Ok(count)
}
