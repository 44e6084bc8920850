use clap::Parser;

/// Arguments for the wtf command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Explain missing dependencies:\n    dmdiag wtf\n\n\
                  Machine-readable report:\n    dmdiag wtf --json")]
pub struct WtfArgs {
    /// Emit the diagnosis as JSON
    #[arg(long)]
    pub json: bool,
}
