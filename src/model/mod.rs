//! Data model shared by every aggregation step
//!
//! - [`Module`]: one buildable unit of the reactor
//! - [`Coordinate`]: a dependency reference
//! - [`Artifact`]: a resolved, versioned artifact
//! - [`ResourceSet`]: a filtered directory bundled into a module's output

pub mod artifact;
pub mod coordinate;
pub mod module;
pub mod resource;

pub use artifact::Artifact;
pub use coordinate::Coordinate;
pub use module::{Module, Packaging};
pub use resource::{ResourceEntry, ResourceSet};
