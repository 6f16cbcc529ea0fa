//! Configuration file handling
//!
//! - `reactor.yaml` - the modules of the build plus aggregation settings
//! - its `aggregate` section - source substitution, frontend bundle, publishing

pub mod aggregate;
pub mod manifest;

pub use aggregate::AggregateConfig;
pub use manifest::{MANIFEST_FILE, ReactorManifest};
