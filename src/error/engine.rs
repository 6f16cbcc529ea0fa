//! Aggregation engine errors

use super::AggregateError;

/// Creates an engine failure error
pub fn failed(message: impl Into<String>) -> AggregateError {
    AggregateError::EngineFailed {
        message: message.into(),
    }
}

/// Creates an error for a missing engine command
pub fn command_missing() -> AggregateError {
    AggregateError::EngineCommandMissing
}
