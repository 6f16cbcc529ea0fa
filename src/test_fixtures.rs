//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{write_zip, sample_reactor};
//!
//! #[test]
//! fn my_test() {
//!     let temp = tempfile::TempDir::new().unwrap();
//!     write_zip(&temp.path().join("bundle.jar"), &[("index.html", "<html/>")]);
//!     let reactor = sample_reactor(temp.path());
//! }
//! ```

#![allow(clippy::expect_used)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::model::Module;
use crate::reactor::Reactor;

/// Write a zip archive with the given `(name, contents)` entries.
///
/// Names ending in `/` become directory entries.
///
/// # Panics
///
/// Panics if the archive cannot be written.
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).expect("Failed to create archive");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, contents) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(*name, options)
                .expect("Failed to add directory entry");
        } else {
            writer
                .start_file(*name, options)
                .expect("Failed to start archive entry");
            writer
                .write_all(contents.as_bytes())
                .expect("Failed to write archive entry");
        }
    }

    writer.finish().expect("Failed to finish archive");
}

/// A three-module reactor rooted at an aggregator `parent` under `base`.
///
/// `core` declares the canonical source root, `web` is the publication target.
///
/// # Panics
///
/// Never in practice; the module list is not empty.
pub fn sample_reactor(base: &Path) -> Reactor {
    let modules = vec![
        Module::new("org.x", "parent", "1.0")
            .with_packaging("pom")
            .with_base_dir(base),
        Module::new("org.x", "core", "1.0")
            .with_base_dir(base.join("core"))
            .with_source_root(base.join("core/src/main/java"))
            .with_artifact_file(base.join("core/target/core-1.0.jar")),
        Module::new("org.x", "web", "1.0")
            .with_packaging("war")
            .with_base_dir(base.join("web"))
            .with_source_root(base.join("web/src/main/java")),
    ];
    Reactor::new(modules).expect("sample reactor has modules")
}
