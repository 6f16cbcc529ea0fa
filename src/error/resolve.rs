//! Dependency resolution errors

use super::AggregateError;

/// Creates an artifact not found error
pub fn not_found(coordinate: impl Into<String>, location: impl Into<String>) -> AggregateError {
    AggregateError::ArtifactNotFound {
        coordinate: coordinate.into(),
        location: location.into(),
    }
}

/// Creates a resolution failure wrapping the underlying cause
pub fn failed<E>(coordinate: impl Into<String>, cause: E) -> AggregateError
where
    E: std::error::Error + Send + Sync + 'static,
{
    AggregateError::ResolutionFailed {
        coordinate: coordinate.into(),
        source: Box::new(cause),
    }
}

/// Creates an error for an artifact that was resolved without a file
pub fn no_file(coordinate: impl Into<String>) -> AggregateError {
    AggregateError::ArtifactFileMissing {
        coordinate: coordinate.into(),
    }
}
