use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dmdiag completions bash > ~/.bash_completion.d/dmdiag\n\n\
                  Generate zsh completions:\n    dmdiag completions zsh > ~/.zfunc/_dmdiag\n\n\
                  Generate fish completions:\n    dmdiag completions fish > ~/.config/fish/completions/dmdiag.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
