//! Command helper utilities

use std::path::Path;

use reactor_aggregate::config::{AggregateConfig, ReactorManifest};
use reactor_aggregate::error::Result;
use reactor_aggregate::reactor::Reactor;

/// Load the manifest at `path` and split it into reactor and settings
pub fn load_reactor(path: &Path) -> Result<(Reactor, AggregateConfig)> {
    ReactorManifest::load(path)?.into_reactor()
}
