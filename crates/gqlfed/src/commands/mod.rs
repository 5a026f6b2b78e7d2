mod dot;
mod purge;

use crate::Cli;
use crate::CommandResult;
use dot::DotCmd;
use purge::PurgeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlfed")]
pub(crate) enum CommandEnum {
    /// Render the reference graph of a GraphQL schema as Graphviz dot code.
    Dot(Box<DotCmd>),

    /// Remove every type, input, enum, field and enum value whose comment
    /// doesn't carry a keep pattern.
    Purge(Box<PurgeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Dot(cmd) => cmd.run(cli).await,
            Self::Purge(cmd) => cmd.run(cli).await,
        }
    }
}
