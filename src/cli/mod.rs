//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - list: List command arguments
//! - wtf: Diagnose command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod wtf;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use wtf::WtfArgs;

/// dmdiag - dependency manager diagnostics
///
/// Inspect a snapshot of a component registry and explain why components are down.
#[derive(Parser, Debug)]
#[command(
    name = "dmdiag",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "List dependency manager components and diagnose why they are down",
    long_about = "dmdiag reads a point-in-time snapshot of a dependency manager registry \
                  (owning units, components and their dependencies), lists components with \
                  their dependency states, and walks the dependency graph of unavailable \
                  components to report the root causes.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dmdiag list                              \x1b[90m# List all components\x1b[0m\n   \
                  dmdiag list --compact --notavail         \x1b[90m# Compact list of down components\x1b[0m\n   \
                  dmdiag list -c 'org\\.example\\..*'       \x1b[90m# Filter by implementation class\x1b[0m\n   \
                  dmdiag wtf                               \x1b[90m# Explain missing dependencies\x1b[0m\n   \
                  dmdiag -s dump.yaml wtf --json           \x1b[90m# Diagnose another snapshot as JSON\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Registry snapshot to inspect
    #[arg(
        long,
        short = 's',
        global = true,
        env = "DMDIAG_SNAPSHOT",
        default_value = "dm-snapshot.yaml"
    )]
    pub snapshot: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List components and their dependencies
    #[command(visible_alias = "dm")]
    List(ListArgs),

    /// Find the root causes of unavailable components
    #[command(visible_alias = "diagnose")]
    Wtf(WtfArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["dmdiag", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_list_alias() {
        let cli = Cli::try_parse_from(["dmdiag", "dm", "--nd"]).unwrap();
        match cli.command {
            Commands::List(args) => assert!(args.nodeps),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_wtf() {
        let cli = Cli::try_parse_from(["dmdiag", "wtf", "--json"]).unwrap();
        match cli.command {
            Commands::Wtf(args) => assert!(args.json),
            _ => panic!("Expected Wtf command"),
        }
    }

    #[test]
    fn test_cli_parsing_diagnose_alias() {
        let cli = Cli::try_parse_from(["dmdiag", "diagnose"]).unwrap();
        assert!(matches!(cli.command, Commands::Wtf(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["dmdiag", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["dmdiag", "-v", "-s", "/tmp/dump.yaml", "list"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.snapshot, PathBuf::from("/tmp/dump.yaml"));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["dmdiag", "wtf", "--snapshot", "/tmp/dump.yaml"]).unwrap();
        assert_eq!(cli.snapshot, PathBuf::from("/tmp/dump.yaml"));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["dmdiag", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
