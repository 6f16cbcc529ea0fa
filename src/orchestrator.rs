//! Aggregation orchestration
//!
//! Sequences the steps around the engine call:
//!
//! 1. Extract the configured frontend bundle into the output directory
//! 2. Run the engine with the source-root provider and reactor resolver
//! 3. Publish the produced artifact to the configured target module
//!
//! Every step is fatal on error. Nothing is retried and nothing is rolled back.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::archive::{self, ArchiverRegistry, ExtractSummary};
use crate::config::AggregateConfig;
use crate::engine::{AggregationEngine, AggregationRequest};
use crate::error::{Result, fs::write_failed, resolve::no_file};
use crate::model::{Artifact, Coordinate};
use crate::publish::{Publication, ResourcePublisher};
use crate::reactor::Reactor;
use crate::resolver::{DependencyResolver, ReactorResolver};

/// Classifier of the aggregated artifact
pub const CLASSIFIER: &str = "docbundle";

/// Internal metadata never copied out of the frontend bundle
pub const FRONTEND_EXCLUDES: [&str; 1] = ["META-INF/**"];

/// Frontend bundle extracted before aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontendExtraction {
    pub coordinate: Coordinate,
    pub archive: PathBuf,
    #[serde(flatten)]
    pub summary: ExtractSummary,
}

/// Outcome of one orchestrated run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub output_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<FrontendExtraction>,
    /// Artifacts the engine attached to the execution root
    pub produced: Vec<Artifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<Publication>,
}

/// Drives one aggregation over a reactor
pub struct Orchestrator<'a> {
    config: &'a AggregateConfig,
    archivers: &'a ArchiverRegistry,
    external: &'a dyn DependencyResolver,
    engine: &'a dyn AggregationEngine,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: &'a AggregateConfig,
        archivers: &'a ArchiverRegistry,
        external: &'a dyn DependencyResolver,
        engine: &'a dyn AggregationEngine,
    ) -> Self {
        Self {
            config,
            archivers,
            external,
            engine,
        }
    }

    pub fn run(&self, reactor: &mut Reactor) -> Result<RunReport> {
        let frontend = self.extract_frontend(reactor)?;
        let produced = self.aggregate(reactor)?;
        let publication = self.publish(reactor)?;

        Ok(RunReport {
            output_dir: self.config.output_dir.clone(),
            frontend,
            produced,
            publication,
        })
    }

    /// Step 1: unpack the frontend bundle, if one is configured
    fn extract_frontend(&self, reactor: &Reactor) -> Result<Option<FrontendExtraction>> {
        let Some(coordinate) = &self.config.frontend_bundle else {
            return Ok(None);
        };

        let resolver = ReactorResolver::new(reactor.modules(), self.external);
        let artifact = resolver.resolve(coordinate)?;
        let archive = artifact
            .file
            .ok_or_else(|| no_file(coordinate.to_string()))?;

        let output = &self.config.output_dir;
        fs::create_dir_all(output)
            .map_err(|e| write_failed(output.display().to_string(), e.to_string()))?;

        let excludes: Vec<String> = FRONTEND_EXCLUDES.iter().map(ToString::to_string).collect();
        let summary = archive::extract(self.archivers, &archive, output, &excludes)?;

        Ok(Some(FrontendExtraction {
            coordinate: coordinate.clone(),
            archive,
            summary,
        }))
    }

    /// Step 2: run the engine and attach what it returns to the execution root
    fn aggregate(&self, reactor: &mut Reactor) -> Result<Vec<Artifact>> {
        let sources = self.config.source_roots();
        let produced = {
            let resolver = ReactorResolver::new(reactor.modules(), self.external);
            let request = AggregationRequest {
                modules: reactor.modules(),
                root: reactor.root(),
                output_dir: &self.config.output_dir,
                classifier: CLASSIFIER,
                sources: &sources,
                dependencies: &resolver,
            };
            self.engine.aggregate(&request)?
        };

        let root = reactor.root_mut();
        for artifact in &produced {
            debug!(module = %root.artifact_id, artifact = %artifact.file_name(), "Attached artifact");
            root.add_attached_artifact(artifact.clone());
        }
        Ok(produced)
    }

    /// Step 3: hand the produced artifact to the publisher
    fn publish(&self, reactor: &mut Reactor) -> Result<Option<Publication>> {
        let version = reactor.version().to_string();
        let mut matches = reactor
            .root()
            .attached_artifacts
            .iter()
            .filter(|artifact| artifact.is_produced(CLASSIFIER, &version));

        let Some(artifact) = matches.next().cloned() else {
            info!(classifier = CLASSIFIER, %version, "No aggregated artifact produced");
            return Ok(None);
        };
        for extra in matches {
            warn!(artifact = %extra.file_name(), "Ignoring additional aggregated artifact");
        }
        info!(artifact = %artifact.file_name(), "Found aggregated artifact");

        ResourcePublisher::new(&self.config.output_dir, self.config.append_to.clone())
            .strict(self.config.strict_publish)
            .publish(reactor, &artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AggregateError;
    use crate::error::resolve::not_found;
    use crate::model::Module;
    use crate::test_fixtures::{sample_reactor, write_zip};
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::TempDir;

    /// Engine recording what it saw and returning fixed artifacts
    struct FakeEngine {
        artifacts: Vec<Artifact>,
        roots: RefCell<Vec<PathBuf>>,
        resolved: RefCell<Vec<Artifact>>,
        fail: bool,
    }

    impl FakeEngine {
        fn returning(artifacts: Vec<Artifact>) -> Self {
            Self {
                artifacts,
                roots: RefCell::new(Vec::new()),
                resolved: RefCell::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::returning(Vec::new())
            }
        }
    }

    impl AggregationEngine for FakeEngine {
        fn aggregate(&self, request: &AggregationRequest<'_>) -> Result<Vec<Artifact>> {
            if self.fail {
                return Err(crate::error::engine::failed("generator crashed"));
            }
            for module in request.modules {
                self.roots
                    .borrow_mut()
                    .extend(request.sources.source_roots(module));
                for dependency in &module.dependencies {
                    self.resolved
                        .borrow_mut()
                        .push(request.dependencies.resolve(dependency)?);
                }
            }
            Ok(self.artifacts.clone())
        }
    }

    /// External resolver serving a single coordinate
    struct OneFile {
        coordinate: Coordinate,
        file: PathBuf,
        calls: RefCell<usize>,
    }

    impl DependencyResolver for OneFile {
        fn resolve(&self, coordinate: &Coordinate) -> Result<Artifact> {
            *self.calls.borrow_mut() += 1;
            if coordinate == &self.coordinate {
                Ok(Artifact::new(
                    &coordinate.group_id,
                    &coordinate.artifact_id,
                    coordinate.version.clone().unwrap_or_default(),
                )
                .with_extension(&coordinate.extension)
                .with_file(&self.file))
            } else {
                Err(not_found(coordinate.to_string(), "test repository"))
            }
        }
    }

    fn nothing_external() -> OneFile {
        OneFile {
            coordinate: Coordinate::new("none", "none"),
            file: PathBuf::new(),
            calls: RefCell::new(0),
        }
    }

    fn produced(version: &str) -> Artifact {
        Artifact::new("org.x", "parent", version)
            .with_classifier(CLASSIFIER)
            .with_file(format!("/p/target/parent-{version}-docbundle.jar"))
    }

    fn config(base: &Path, target: Option<&str>) -> AggregateConfig {
        AggregateConfig {
            output_dir: base.join("target/docbundle"),
            build_dir: base.join("target"),
            append_to: target.map(str::to_string),
            ..AggregateConfig::default()
        }
    }

    #[test]
    fn test_run_publishes_produced_artifact() {
        let temp = TempDir::new().unwrap();
        let mut reactor = sample_reactor(temp.path());
        let config = config(temp.path(), Some("web"));
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let engine = FakeEngine::returning(vec![produced("1.0")]);

        let report = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap();

        assert_eq!(report.frontend, None);
        assert_eq!(report.produced, vec![produced("1.0")]);
        let publication = report.publication.unwrap();
        assert_eq!(publication.module, "web");
        assert_eq!(publication.artifact, produced("1.0"));

        assert_eq!(reactor.root().attached_artifacts, vec![produced("1.0")]);
        let web = reactor.find("web").unwrap();
        assert_eq!(web.resources.len(), 2);
        assert_eq!(web.attached_artifacts, vec![produced("1.0")]);
        assert!(reactor.find("core").unwrap().resources.is_empty());
    }

    #[test]
    fn test_engine_sees_substituted_roots_and_reactor_artifacts() {
        let temp = TempDir::new().unwrap();
        let modules = vec![
            Module::new("org.x", "docs", "1.0").with_packaging("pom"),
            Module::new("org.x", "core", "1.0")
                .with_source_root("/p/core/src/main/java")
                .with_artifact_file("/p/core/target/core-1.0.jar"),
            Module::new("org.x", "web", "1.0")
                .with_dependency(Coordinate::new("org.x", "core").with_version("0.9")),
        ];
        let mut reactor = Reactor::new(modules).unwrap();
        let config = config(temp.path(), None);
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let engine = FakeEngine::returning(Vec::new());

        Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap();

        assert_eq!(
            *engine.roots.borrow(),
            vec![PathBuf::from("/p/core/target/generated-sources/delombok")]
        );
        let resolved = engine.resolved.borrow();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].artifact_id, "core");
        assert_eq!(resolved[0].version, "1.0");
        assert_eq!(*external.calls.borrow(), 0);
    }

    #[test]
    fn test_frontend_bundle_is_extracted_without_metadata() {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("console-2.1.zip");
        write_zip(
            &bundle,
            &[
                ("META-INF/MANIFEST.MF", "Manifest-Version: 1.0"),
                ("index.html", "<html/>"),
                ("js/app.js", "run()"),
            ],
        );
        let coordinate: Coordinate = "org.ui:console:2.1:zip".parse().unwrap();
        let external = OneFile {
            coordinate: coordinate.clone(),
            file: bundle.clone(),
            calls: RefCell::new(0),
        };

        let mut reactor = sample_reactor(temp.path());
        let config = AggregateConfig {
            frontend_bundle: Some(coordinate.clone()),
            ..config(temp.path(), None)
        };
        let registry = ArchiverRegistry::with_defaults();
        let engine = FakeEngine::returning(Vec::new());

        let report = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap();

        let frontend = report.frontend.unwrap();
        assert_eq!(frontend.coordinate, coordinate);
        assert_eq!(frontend.archive, bundle);
        assert_eq!(frontend.summary.extracted, 2);
        assert_eq!(frontend.summary.skipped, 1);

        let output = temp.path().join("target/docbundle");
        assert!(output.join("index.html").is_file());
        assert!(output.join("js/app.js").is_file());
        assert!(!output.join("META-INF").exists());
    }

    #[test]
    fn test_unresolvable_frontend_aborts_before_engine() {
        let temp = TempDir::new().unwrap();
        let mut reactor = sample_reactor(temp.path());
        let config = AggregateConfig {
            frontend_bundle: Some("org.ui:console:2.1:zip".parse().unwrap()),
            ..config(temp.path(), Some("web"))
        };
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let engine = FakeEngine::returning(vec![produced("1.0")]);

        let err = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap_err();

        assert!(matches!(err, AggregateError::ArtifactNotFound { .. }));
        assert!(engine.roots.borrow().is_empty());
        assert!(reactor.root().attached_artifacts.is_empty());
    }

    #[test]
    fn test_frontend_in_reactor_without_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut reactor = sample_reactor(temp.path());
        let config = AggregateConfig {
            frontend_bundle: Some(Coordinate::new("org.x", "web")),
            ..config(temp.path(), None)
        };
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let engine = FakeEngine::returning(Vec::new());

        let err = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap_err();

        assert!(matches!(err, AggregateError::ArtifactFileMissing { .. }));
    }

    #[test]
    fn test_engine_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let mut reactor = sample_reactor(temp.path());
        let config = config(temp.path(), Some("web"));
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let engine = FakeEngine::failing();

        let err = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap_err();

        assert!(matches!(err, AggregateError::EngineFailed { .. }));
        assert!(reactor.find("web").unwrap().resources.is_empty());
    }

    #[test]
    fn test_artifact_with_other_version_is_not_published() {
        let temp = TempDir::new().unwrap();
        let mut reactor = sample_reactor(temp.path());
        let config = config(temp.path(), Some("web"));
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let engine = FakeEngine::returning(vec![produced("0.9")]);

        let report = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap();

        assert_eq!(report.publication, None);
        assert!(reactor.find("web").unwrap().attached_artifacts.is_empty());
    }

    #[test]
    fn test_only_first_matching_artifact_is_published() {
        let temp = TempDir::new().unwrap();
        let mut reactor = sample_reactor(temp.path());
        let config = config(temp.path(), Some("web"));
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let second = produced("1.0").with_file("/p/elsewhere.jar");
        let engine = FakeEngine::returning(vec![produced("1.0"), second]);

        let report = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap();

        assert_eq!(report.publication.unwrap().artifact, produced("1.0"));
        assert_eq!(
            reactor.find("web").unwrap().attached_artifacts,
            vec![produced("1.0")]
        );
    }

    #[test]
    fn test_strict_publish_fails_for_absent_target() {
        let temp = TempDir::new().unwrap();
        let mut reactor = sample_reactor(temp.path());
        let config = AggregateConfig {
            strict_publish: true,
            ..config(temp.path(), Some("console"))
        };
        let registry = ArchiverRegistry::with_defaults();
        let external = nothing_external();
        let engine = FakeEngine::returning(vec![produced("1.0")]);

        let err = Orchestrator::new(&config, &registry, &external, &engine)
            .run(&mut reactor)
            .unwrap_err();

        assert!(matches!(err, AggregateError::TargetModuleNotFound { .. }));
    }
}
