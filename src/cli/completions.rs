use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  reactor-aggregate completions bash > ~/.bash_completion.d/reactor-aggregate\n  \
                  reactor-aggregate completions zsh > ~/.zfunc/_reactor-aggregate")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
