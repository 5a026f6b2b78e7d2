use clap::CommandFactory;
use crate::commands;

/// Command line of the `gqlfed` binary.
#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlfed",
    version,
    about = "Utilities for managing the GraphQL schemas of federated services.",
    after_help = "Set the `LOG_LEVEL` environment variable (trace, debug, \
                  info or verbose) to control logging without --verbose.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose (debug) logging.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Runs when no subcommand is given: there is nothing to do but explain
    /// the available ones.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_long_help()?;
        Ok(())
    }
}
