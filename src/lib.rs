//! Documentation aggregation across a multi-module build
//!
//! The library prepares the inputs of an aggregation engine, runs it over the
//! modules of one build (the reactor) and publishes the aggregated output into
//! a downstream module:
//!
//! - [`sources`]: effective source roots, with preprocessed-source substitution
//! - [`resolver`]: dependency resolution preferring in-build modules
//! - [`archive`]: frontend bundle extraction with exclude globs
//! - [`orchestrator`]: the end-to-end run
//! - [`publish`]: resource sets and artifact attachment on the target module

pub mod archive;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod path_utils;
pub mod publish;
pub mod reactor;
pub mod resolver;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_fixtures;
