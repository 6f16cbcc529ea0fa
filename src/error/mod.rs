//! Error types and handling for reactor-aggregate
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Manifest and configuration errors
//! - [`resolve`]: Dependency resolution errors
//! - [`archive`]: Archive extraction errors
//! - [`engine`]: Aggregation engine errors
//! - [`publish`]: Resource publication errors
//! - [`fs`]: File system errors

pub mod archive;
pub mod config;
pub mod engine;
pub mod fs;
pub mod publish;
pub mod resolve;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for aggregation runs
#[derive(Error, Diagnostic, Debug)]
pub enum AggregateError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(aggregate::config::not_found),
        help("Pass the reactor manifest with --manifest or create reactor.yaml")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(aggregate::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(aggregate::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(aggregate::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Destination directory does not exist or is not a directory: {path}")]
    #[diagnostic(
        code(aggregate::config::missing_destination),
        help("Create the destination directory before extracting into it")
    )]
    MissingDestination { path: String },

    #[error("No archive handler registered for format '{format}'")]
    #[diagnostic(
        code(aggregate::config::no_archive_handler),
        help("Supported formats: jar, zip")
    )]
    NoArchiveHandler { format: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(aggregate::config::invalid_glob))]
    InvalidGlob { pattern: String, reason: String },

    #[error("Invalid coordinate '{input}': {reason}")]
    #[diagnostic(
        code(aggregate::config::invalid_coordinate),
        help("Coordinates look like group:artifact[:version[:extension[:classifier]]]")
    )]
    InvalidCoordinate { input: String, reason: String },

    #[error("Module '{name}' is not part of the reactor")]
    #[diagnostic(code(aggregate::config::module_not_found))]
    ModuleNotFound { name: String },

    // Resolution errors
    #[error("Artifact {coordinate} not found at {location}")]
    #[diagnostic(
        code(aggregate::resolve::not_found),
        help("Install the artifact into the repository or add its module to the reactor")
    )]
    ArtifactNotFound {
        coordinate: String,
        location: String,
    },

    #[error("Failed to resolve {coordinate}: {source}")]
    #[diagnostic(code(aggregate::resolve::failed))]
    ResolutionFailed {
        coordinate: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Artifact {coordinate} has no file to read from")]
    #[diagnostic(
        code(aggregate::resolve::no_file),
        help("Build the module that produces this artifact before aggregating")
    )]
    ArtifactFileMissing { coordinate: String },

    // Archive errors
    #[error("Failed to extract {archive}: {reason}")]
    #[diagnostic(code(aggregate::archive::extraction_failed))]
    ExtractionFailed { archive: String, reason: String },

    #[error("Archive {archive} contains an entry outside the destination: {entry}")]
    #[diagnostic(code(aggregate::archive::unsafe_entry))]
    UnsafeArchiveEntry { archive: String, entry: String },

    // Engine errors
    #[error("Aggregation engine failed: {message}")]
    #[diagnostic(code(aggregate::engine::failed))]
    EngineFailed { message: String },

    #[error("No aggregation command configured")]
    #[diagnostic(
        code(aggregate::engine::no_command),
        help("Set aggregate.command in the manifest or pass the command after --")
    )]
    EngineCommandMissing,

    // Publication errors
    #[error("Target module '{name}' is not part of the reactor")]
    #[diagnostic(
        code(aggregate::publish::target_not_found),
        help("Check append_to, or disable strict publishing to skip silently")
    )]
    TargetModuleNotFound { name: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(aggregate::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(aggregate::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(aggregate::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AggregateError {
    fn from(err: std::io::Error) -> Self {
        AggregateError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AggregateError {
    fn from(err: serde_yaml::Error) -> Self {
        AggregateError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AggregateError>;
