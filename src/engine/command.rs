//! Engine running an external generator command
//!
//! The generator receives a single `@<argfile>` argument. The argument file
//! holds one argument per line:
//!
//! ```text
//! --output=<output dir>
//! --source-root=<existing source root>
//! --dependency=<resolved dependency file>
//! ```
//!
//! Once the command succeeds, the output directory is packaged into
//! `<build dir>/<artifact>-<version>-<classifier>.jar`.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use super::package::pack_directory;
use super::{AggregationEngine, AggregationRequest};
use crate::error::{
    Result,
    engine::{command_missing, failed},
    fs::write_failed,
};
use crate::model::Artifact;

/// Name of the argument file written to the build directory
pub const ARGFILE_NAME: &str = "aggregate.args";

/// Environment variable carrying the output directory
pub const OUTPUT_DIR_ENV: &str = "AGGREGATE_OUTPUT_DIR";

/// Environment variable carrying the classifier
pub const CLASSIFIER_ENV: &str = "AGGREGATE_CLASSIFIER";

#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
    build_dir: PathBuf,
}

impl CommandEngine {
    /// `command` is the program followed by its fixed arguments
    pub fn new(command: &[String], build_dir: impl Into<PathBuf>) -> Result<Self> {
        let (program, args) = command.split_first().ok_or_else(command_missing)?;
        if program.trim().is_empty() {
            return Err(command_missing());
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            build_dir: build_dir.into(),
        })
    }

    /// Argument lines for one aggregation
    ///
    /// Source roots that do not exist are skipped. Dependencies are resolved
    /// in reactor order and listed once each.
    pub fn arguments(&self, request: &AggregationRequest<'_>) -> Result<Vec<String>> {
        let mut lines = vec![format!("--output={}", request.output_dir.display())];
        let mut seen = HashSet::new();

        for module in request.modules {
            for root in request.sources.source_roots(module) {
                if root.is_dir() {
                    lines.push(format!("--source-root={}", root.display()));
                } else {
                    debug!(
                        module = %module.artifact_id,
                        root = %root.display(),
                        "Skipping missing source root"
                    );
                }
            }

            for dependency in &module.dependencies {
                let artifact = request.dependencies.resolve(dependency)?;
                match artifact.file {
                    Some(file) if seen.insert(file.clone()) => {
                        lines.push(format!("--dependency={}", file.display()));
                    }
                    Some(_) => {}
                    None => debug!(%dependency, "Dependency has no file yet"),
                }
            }
        }

        Ok(lines)
    }
}

impl AggregationEngine for CommandEngine {
    fn aggregate(&self, request: &AggregationRequest<'_>) -> Result<Vec<Artifact>> {
        let output = request.output_dir;
        fs::create_dir_all(output)
            .map_err(|e| write_failed(output.display().to_string(), e.to_string()))?;
        fs::create_dir_all(&self.build_dir)
            .map_err(|e| write_failed(self.build_dir.display().to_string(), e.to_string()))?;

        let argfile = self.build_dir.join(ARGFILE_NAME);
        let mut contents = self.arguments(request)?.join("\n");
        contents.push('\n');
        fs::write(&argfile, contents)
            .map_err(|e| write_failed(argfile.display().to_string(), e.to_string()))?;

        info!(program = %self.program, argfile = %argfile.display(), "Running aggregation command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(format!("@{}", argfile.display()))
            .env(OUTPUT_DIR_ENV, output)
            .env(CLASSIFIER_ENV, request.classifier)
            .status()
            .map_err(|e| failed(format!("could not start '{}': {}", self.program, e)))?;
        if !status.success() {
            return Err(failed(format!("'{}' exited with {}", self.program, status)));
        }

        let root = request.root;
        let artifact = Artifact::new(&root.group_id, &root.artifact_id, &root.version)
            .with_classifier(request.classifier);
        let archive = self.build_dir.join(artifact.file_name());
        let entries = pack_directory(output, &archive, &[argfile.as_path()])?;
        info!(archive = %archive.display(), entries, "Packaged aggregate");

        Ok(vec![artifact.with_file(archive)])
    }
}
