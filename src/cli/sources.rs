use clap::Parser;

/// Arguments for the sources command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show source roots of every module:\n    reactor-aggregate sources\n\n\
                  Show source roots of one module:\n    reactor-aggregate sources core\n\n\
                  Show declared roots without substitution:\n    reactor-aggregate sources --no-preprocessed-sources")]
pub struct SourcesArgs {
    /// Artifact id of the module to show (all modules when omitted)
    pub module: Option<String>,

    /// Show declared roots without preprocessed-source substitution
    #[arg(long)]
    pub no_preprocessed_sources: bool,
}
