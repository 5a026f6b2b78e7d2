use crate::output_utils;
use crate::file_reader;
use crate::Cli;
use crate::CommandResult;
use crate::DotWriter;
use crate::RunnableCommand;
use anyhow::Context;
use libgqlfed::SdlDocument;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct DotCmd {
    #[arg(
        help="Also render enum values, connected to their enum.",
        long,
    )]
    enum_values: bool,

    #[arg(
        help="Path of the file the dot code is written to. Overwritten if it \
             already exists.",
        long,
        short='o',
    )]
    output: PathBuf,

    #[arg(
        help="Also render field parameters, connected to their field.",
        long,
        short='p',
    )]
    params: bool,

    #[arg(
        help="Path to the GraphQL schema to render.",
        name="FILE",
    )]
    file: PathBuf,
}

impl DotCmd {
    fn write_dot(&self) -> anyhow::Result<usize> {
        if is_same_file(&self.file, &self.output) {
            anyhow::bail!(
                "input and output are the same file ({:?}), refusing to \
                overwrite the schema",
                self.file,
            );
        }

        log::info!("Parsing {:?}.", self.file);
        let content = file_reader::read_content(&self.file)?;
        let document = SdlDocument::parse(&content)
            .with_context(|| format!("couldn't parse {:?}", self.file))?;
        for warning in document.parse_warnings() {
            log::warn!("{:?}: {warning}", self.file);
        }

        let dot = DotWriter::new(&document)
            .include_enum_values(self.enum_values)
            .include_params(self.params)
            .write();

        log::info!("Saving dot code in {:?}.", self.output);
        std::fs::write(&self.output, dot)
            .with_context(|| format!("couldn't write {:?}", self.output))?;
        Ok(document.graph().edge_count())
    }
}

#[inherent::inherent]
impl RunnableCommand for DotCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.write_dot() {
            Ok(edge_count) => CommandResult::stdout(format_args!(
                "{} Wrote {:?} ({edge_count} references between types).",
                output_utils::GREEN_CHECK,
                self.output,
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

/// Falls back to comparing the paths as given when either can't be
/// canonicalized (e.g. the output doesn't exist yet).
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
