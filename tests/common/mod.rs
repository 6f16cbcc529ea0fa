//! Common test utilities for reactor-aggregate integration tests

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Manifest of a three-module build: an aggregator, a library and a web module
#[allow(dead_code)]
pub const SAMPLE_MANIFEST: &str = r"
execution_root: parent
modules:
  - group_id: org.x
    artifact_id: parent
    version: 1.0.0
    packaging: pom
    base_dir: .
  - group_id: org.x
    artifact_id: core
    version: 1.0.0
    base_dir: core
    source_roots: [src/main/java]
    artifact_file: target/core-1.0.0.jar
    dependencies: ['org.ext:lib:2.0']
  - group_id: org.x
    artifact_id: web
    version: 1.0.0
    packaging: war
    base_dir: web
    source_roots: [src/main/kotlin]
    dependencies: ['org.x:core:0.1']
aggregate:
  repository: repo
";

/// A build directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the build root, where reactor.yaml lives
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty build directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create the sample build: manifest, source trees, built jars and a repository
    pub fn sample() -> Self {
        let workspace = Self::new();
        workspace.write_manifest(SAMPLE_MANIFEST);
        workspace.write_file(
            "core/target/generated-sources/delombok/org/x/Core.java",
            "class Core {}",
        );
        workspace.write_file("core/src/main/java/org/x/Core.java", "@Data class Core {}");
        workspace.write_file("web/src/main/kotlin/org/x/Web.kt", "class Web");
        workspace.write_file("core/target/core-1.0.0.jar", "jar");
        workspace.write_file("repo/org/ext/lib/2.0/lib-2.0.jar", "jar");
        workspace
    }

    /// Write reactor.yaml
    pub fn write_manifest(&self, content: &str) {
        self.write_file("reactor.yaml", content);
    }

    /// Write a file in the build directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a zip archive with `(name, contents)` entries
    pub fn write_zip(&self, path: &str, entries: &[(&str, &str)]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let file = File::create(&file_path).expect("Failed to create archive");
        let mut writer = ZipWriter::new(file);
        for (name, contents) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .expect("Failed to start archive entry");
            writer
                .write_all(contents.as_bytes())
                .expect("Failed to write archive entry");
        }
        writer.finish().expect("Failed to finish archive");
        file_path
    }

    /// Read a file from the build directory
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the build directory
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path to reactor.yaml
    pub fn manifest(&self) -> PathBuf {
        self.path.join("reactor.yaml")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
