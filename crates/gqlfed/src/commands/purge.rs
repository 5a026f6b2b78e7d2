use crate::output_utils;
use crate::input_files;
use crate::purge;
use crate::purge::PurgeConfig;
use crate::purge::PurgeConfigError;
use crate::purge::PurgeFilter;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PurgeCmd {
    #[arg(
        help="Path to the YAML purge config. It lists the `keepPatterns` a \
             comment must contain for its entity to be kept, and optionally \
             the `secondKeepPatterns` that must follow on the same line.",
        long,
        short='c',
    )]
    config: PathBuf,

    #[arg(
        help="Paths to skip. Any input whose path contains one of these is \
             excluded, even if it was passed explicitly.",
        long,
        short='e',
    )]
    exclude: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Confirm that input files may be overwritten when no --suffix \
             is given.",
        long,
    )]
    overwrite: bool,

    #[arg(
        allow_hyphen_values=true,
        help="Suffix inserted before the `.graphql` extension of each output \
             file, e.g. `-purged` writes `schema.graphql` to \
             `schema-purged.graphql`.",
        long,
        short='s',
    )]
    suffix: Option<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be purged. Directories are searched \
             at most 5 levels deep.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for PurgeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let suffix = self.suffix.as_deref().filter(|suffix| !suffix.is_empty());
        match (suffix, self.overwrite) {
            (None, false) => return CommandResult::stderr(format_args!(
                "{} Without --suffix the input files are overwritten. Pass \
                --overwrite to confirm.",
                output_utils::RED_X,
            )),
            (None, true) => log::info!("Input files will be overwritten."),
            (Some(_), true) => log::warn!(
                "--suffix and --overwrite can't be used together, \
                --overwrite is ignored.",
            ),
            (Some(_), false) => (),
        }

        let config = match PurgeConfig::load(&self.config) {
            Ok(config) => config,
            Err(PurgeConfigError::ReadContent(err)) => return CommandResult::stderr(format_args!(
                "{} Couldn't load config: {err}",
                output_utils::RED_X,
            )),
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Invalid config {:?}: {err}",
                output_utils::RED_X,
                self.config,
            )),
        };
        let filter = PurgeFilter::new(&config);

        let file_paths = input_files::collect_input_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
            &self.exclude,
        );

        let mut written = vec![];
        let mut errors = vec![];
        for path in &file_paths {
            match purge::purge_file(&filter, path, suffix) {
                Ok(out_path) => written.push(out_path),
                Err(err) => {
                    log::error!("{err:#}");
                    errors.push(format!("{path:?}: {err:#}"));
                },
            }
        }

        if errors.is_empty() {
            CommandResult::stdout(format_args!(
                "{} Purged {} files.",
                output_utils::GREEN_CHECK,
                written.len(),
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{} Purged {} of {} files. Errors:\n  * {}",
                output_utils::RED_X,
                written.len(),
                file_paths.len(),
                errors.join("\n  * "),
            ))
        }
    }
}
