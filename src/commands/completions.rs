//! Shell completions command

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    tracing::debug!(shell = %args.shell, "generating completions");
    clap_complete::generate(args.shell, &mut cmd, "dmdiag", &mut std::io::stdout().lock());
    Ok(())
}
