//! Cross-platform path utilities
//!
//! Glob matching and path anchoring shared by the archive extractor, resource
//! sets and manifest loading.

use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, archive::invalid_glob};

/// Convert a path to a string with forward slashes
///
/// Glob patterns are always written with `/`, so candidate paths are
/// normalized before matching.
///
/// ```
/// use std::path::Path;
/// use reactor_aggregate::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("a\\b/c.txt")), "a/b/c.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check if a glob pattern matches a relative file path
///
/// Uses wax for platform-independent glob matching. Falls back to an exact
/// comparison when the pattern does not compile.
pub fn matches_glob(pattern: &str, file_path: &str) -> bool {
    let normalized_path = to_forward_slashes(Path::new(file_path));
    let candidate = CandidatePath::from(normalized_path.as_str());

    if let Ok(glob) = Glob::new(pattern) {
        glob.matched(&candidate).is_some()
    } else {
        pattern == normalized_path
    }
}

/// True when any of the patterns matches the path
pub fn matches_any(patterns: &[String], file_path: &str) -> bool {
    patterns
        .iter()
        .any(|pattern| matches_glob(pattern, file_path))
}

/// Reject patterns wax cannot compile
pub fn validate_globs(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        Glob::new(pattern).map_err(|e| invalid_glob(pattern, e.to_string()))?;
    }
    Ok(())
}

/// Anchor a possibly relative path at `base`
///
/// `.` components are dropped; `..` is kept as written.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    joined.components().collect()
}
