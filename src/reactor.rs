//! The reactor: the ordered set of modules taking part in the current build

use crate::error::{
    Result,
    config::{invalid, module_not_found},
};
use crate::model::Module;

/// Ordered in-build modules plus the module the aggregation runs from
#[derive(Debug, Clone)]
pub struct Reactor {
    modules: Vec<Module>,
    root: usize,
}

impl Reactor {
    /// Build a reactor whose execution root is the first module
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        if modules.is_empty() {
            return Err(invalid("the reactor has no modules"));
        }
        Ok(Self { modules, root: 0 })
    }

    /// Build a reactor rooted at the module with the given artifact id
    pub fn with_root(modules: Vec<Module>, root_artifact_id: &str) -> Result<Self> {
        let mut reactor = Self::new(modules)?;
        reactor.root = reactor
            .position(root_artifact_id)
            .ok_or_else(|| module_not_found(root_artifact_id))?;
        Ok(reactor)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// The module the aggregation is invoked on
    pub fn root(&self) -> &Module {
        &self.modules[self.root]
    }

    pub fn root_mut(&mut self) -> &mut Module {
        &mut self.modules[self.root]
    }

    /// Version of the top-level build
    pub fn version(&self) -> &str {
        &self.root().version
    }

    /// First module with the given artifact id
    pub fn find(&self, artifact_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.artifact_id == artifact_id)
    }

    pub fn find_mut(&mut self, artifact_id: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.artifact_id == artifact_id)
    }

    fn position(&self, artifact_id: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.artifact_id == artifact_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> Vec<Module> {
        vec![
            Module::new("org.x", "parent", "1.0").with_packaging("pom"),
            Module::new("org.x", "core", "1.0"),
            Module::new("org.x", "web", "1.0").with_packaging("war"),
        ]
    }

    #[test]
    fn test_empty_reactor_is_rejected() {
        assert!(Reactor::new(Vec::new()).is_err());
    }

    #[test]
    fn test_root_defaults_to_first_module() {
        let reactor = Reactor::new(modules()).unwrap();
        assert_eq!(reactor.root().artifact_id, "parent");
        assert_eq!(reactor.version(), "1.0");
    }

    #[test]
    fn test_with_root_selects_module() {
        let reactor = Reactor::with_root(modules(), "web").unwrap();
        assert_eq!(reactor.root().artifact_id, "web");
    }

    #[test]
    fn test_with_unknown_root_fails() {
        let err = Reactor::with_root(modules(), "missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_find_by_artifact_id() {
        let mut reactor = Reactor::new(modules()).unwrap();
        assert!(reactor.find("core").is_some());
        assert!(reactor.find("absent").is_none());

        reactor.find_mut("core").unwrap().version = "2.0".to_string();
        assert_eq!(reactor.find("core").unwrap().version, "2.0");
    }
}
