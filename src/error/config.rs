//! Configuration errors

use super::AggregateError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> AggregateError {
    AggregateError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AggregateError {
    AggregateError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AggregateError {
    AggregateError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AggregateError {
    AggregateError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid coordinate error
pub fn invalid_coordinate(input: impl Into<String>, reason: impl Into<String>) -> AggregateError {
    AggregateError::InvalidCoordinate {
        input: input.into(),
        reason: reason.into(),
    }
}

/// Creates a module not found error
pub fn module_not_found(name: impl Into<String>) -> AggregateError {
    AggregateError::ModuleNotFound { name: name.into() }
}
