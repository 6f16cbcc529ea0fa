//! Sources command implementation
//!
//! Prints the source roots the aggregation would read, one module at a time.

use std::path::Path;

use crate::cli::SourcesArgs;
use crate::commands::helpers::load_reactor;
use reactor_aggregate::error::{Result, config::module_not_found};
use reactor_aggregate::model::Module;
use reactor_aggregate::sources::SourceRootProvider;

/// Run sources command
pub fn run(manifest: &Path, args: SourcesArgs) -> Result<()> {
    let (reactor, mut config) = load_reactor(manifest)?;
    if args.no_preprocessed_sources {
        config.include_preprocessed_sources = false;
    }

    let modules: Vec<&Module> = match &args.module {
        Some(name) => vec![reactor.find(name).ok_or_else(|| module_not_found(name))?],
        None => reactor.modules().iter().collect(),
    };

    print!("{}", render(&modules, &config.source_roots()));
    Ok(())
}

fn render(modules: &[&Module], provider: &dyn SourceRootProvider) -> String {
    let mut lines = Vec::new();
    for module in modules {
        lines.push(module.id());
        let roots = provider.source_roots(module);
        if roots.is_empty() {
            lines.push("  (no source roots)".to_string());
        }
        lines.extend(roots.iter().map(|root| format!("  {}", root.display())));
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}
