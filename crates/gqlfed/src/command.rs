use crate::Cli;
use crate::CommandResult;

/// A `gqlfed` subcommand. Implementations use `#[inherent::inherent]` so
/// `run` can also be called without importing this trait.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// Runs to completion, reporting failures through the returned
    /// [`CommandResult`] rather than by panicking.
    async fn run(self, cli: Cli) -> CommandResult;
}
