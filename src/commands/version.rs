//! Version command implementation
//!
//! Prints the version followed by the defaults and conventions a run relies on.

use reactor_aggregate::config::MANIFEST_FILE;
use reactor_aggregate::config::aggregate::{DEFAULT_BUILD_DIR, DEFAULT_OUTPUT_DIR};
use reactor_aggregate::engine::command::{ARGFILE_NAME, CLASSIFIER_ENV, OUTPUT_DIR_ENV};
use reactor_aggregate::error::Result;
use reactor_aggregate::orchestrator::CLASSIFIER;
use reactor_aggregate::publish::WEB_MOUNT_PATH;
use reactor_aggregate::sources::{
    DEFAULT_CANONICAL_SOURCE_PATH, DEFAULT_PREPROCESSED_SOURCE_PATH,
};

pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let conventions = [
        ("Manifest", MANIFEST_FILE.to_string()),
        ("Classifier", CLASSIFIER.to_string()),
        ("Output directory", DEFAULT_OUTPUT_DIR.to_string()),
        ("Build directory", DEFAULT_BUILD_DIR.to_string()),
        ("Argument file", format!("<build directory>/{ARGFILE_NAME}")),
        ("Environment", format!("{OUTPUT_DIR_ENV}, {CLASSIFIER_ENV}")),
        (
            "Source substitution",
            format!("{DEFAULT_CANONICAL_SOURCE_PATH} -> {DEFAULT_PREPROCESSED_SOURCE_PATH}"),
        ),
        ("Published under", WEB_MOUNT_PATH.to_string()),
    ];

    let mut lines = vec![
        format!("reactor-aggregate {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Defaults:".to_string(),
    ];
    lines.extend(
        conventions
            .iter()
            .map(|(name, value)| format!("  {name}: {value}")),
    );
    lines.push(String::new());
    lines.join("\n")
}
