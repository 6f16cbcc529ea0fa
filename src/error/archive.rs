//! Archive extraction errors

use super::AggregateError;

/// Creates a missing destination error
pub fn missing_destination(path: impl Into<String>) -> AggregateError {
    AggregateError::MissingDestination { path: path.into() }
}

/// Creates a missing archive handler error
pub fn no_handler(format: impl Into<String>) -> AggregateError {
    AggregateError::NoArchiveHandler {
        format: format.into(),
    }
}

/// Creates an invalid glob error
pub fn invalid_glob(pattern: impl Into<String>, reason: impl Into<String>) -> AggregateError {
    AggregateError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates an extraction failed error
pub fn extraction_failed(archive: impl Into<String>, reason: impl Into<String>) -> AggregateError {
    AggregateError::ExtractionFailed {
        archive: archive.into(),
        reason: reason.into(),
    }
}

/// Creates an unsafe entry error for names escaping the destination
pub fn unsafe_entry(archive: impl Into<String>, entry: impl Into<String>) -> AggregateError {
    AggregateError::UnsafeArchiveEntry {
        archive: archive.into(),
        entry: entry.into(),
    }
}
