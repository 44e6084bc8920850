use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all components:\n    dmdiag list\n\n\
                  Compact listing without dependencies:\n    dmdiag list --cp --nd\n\n\
                  Only unavailable components of unit 12:\n    dmdiag list --na --bid 12\n\n\
                  Components providing a service:\n    dmdiag list --services objectClass=org.example.Greeter")]
pub struct ListArgs {
    /// Hide dependencies
    #[arg(long, visible_alias = "nd")]
    pub nodeps: bool,

    /// Display compact names and states
    #[arg(long, visible_alias = "cp", env = "DMDIAG_COMPACT")]
    pub compact: bool,

    /// Only show unavailable components and dependencies
    #[arg(long, visible_alias = "na")]
    pub notavail: bool,

    /// Print statistics after the listing
    #[arg(long, visible_alias = "st")]
    pub stats: bool,

    /// Service property filter (key=value,...)
    #[arg(long, value_name = "FILTER", env = "DMDIAG_SERVICES")]
    pub services: Option<String>,

    /// Implementation class name patterns (regex, `!` negates)
    #[arg(
        long,
        short = 'c',
        value_name = "REGEX",
        value_delimiter = ',',
        env = "DMDIAG_COMPONENTS"
    )]
    pub components: Vec<String>,

    /// Component ids to display
    #[arg(long = "cid", value_name = "ID", value_delimiter = ',')]
    pub component_ids: Vec<u64>,

    /// Owning unit ids or symbolic names to display
    #[arg(long = "bid", value_name = "ID|NAME", value_delimiter = ',')]
    pub bundle_ids: Vec<String>,
}
