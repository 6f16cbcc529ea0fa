//! Resource publication errors

use super::AggregateError;

/// Creates a target module not found error
pub fn target_not_found(name: impl Into<String>) -> AggregateError {
    AggregateError::TargetModuleNotFound { name: name.into() }
}
