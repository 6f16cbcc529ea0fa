//! Command implementations for the reactor-aggregate CLI

pub mod completions;
pub mod helpers;
pub mod resolve;
pub mod run;
pub mod sources;
pub mod version;
