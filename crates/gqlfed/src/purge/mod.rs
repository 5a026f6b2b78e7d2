//! Comment-driven filtering of GraphQL schemas.
//!
//! Every declaration, field and enum value is kept only if its comment
//! carries one of the configured keep patterns (see [`PurgeFilter`]). The
//! line holding the pattern is then removed from the comment of every
//! survivor.

mod purge_config;
mod purge_filter;

pub(crate) use purge_config::PurgeConfig;
pub(crate) use purge_config::PurgeConfigError;
pub(crate) use purge_filter::PurgeFilter;
pub(crate) use purge_filter::PurgeStats;

use crate::file_reader;
use anyhow::Context;
use libgqlfed::SdlDocument;
use std::path::Path;
use std::path::PathBuf;

const GRAPHQL_FILE_EXT: &str = ".graphql";

/// Where the purged version of `path` is written.
///
/// Without a suffix the input is overwritten. With one, `dir/schema.graphql`
/// becomes `dir/schema<SUFFIX>.graphql`, and a path without the `.graphql`
/// extension just gets the suffix appended.
pub(crate) fn output_path(path: &Path, suffix: Option<&str>) -> PathBuf {
    let Some(suffix) = suffix else {
        return path.to_path_buf();
    };
    let path_str = path.to_string_lossy();
    match path_str.strip_suffix(GRAPHQL_FILE_EXT) {
        Some(stem) => PathBuf::from(format!("{stem}{suffix}{GRAPHQL_FILE_EXT}")),
        None => PathBuf::from(format!("{path_str}{suffix}")),
    }
}

/// Parses, purges and writes out a single file. Returns the path written to.
pub(crate) fn purge_file(
    filter: &PurgeFilter<'_>,
    path: &Path,
    suffix: Option<&str>,
) -> anyhow::Result<PathBuf> {
    log::info!("Processing {path:?}.");
    let content = file_reader::read_content(path)?;
    let mut document = SdlDocument::parse(&content)
        .with_context(|| format!("couldn't parse {path:?}"))?;
    for warning in document.parse_warnings() {
        log::warn!("{path:?}: {warning}");
    }

    let stats: PurgeStats = filter.purge_document(&mut document);
    log::debug!(
        "Removed {} declarations, {} fields and {} enum values from {path:?}.",
        stats.declarations_removed,
        stats.fields_removed,
        stats.values_removed,
    );

    let out_path = output_path(path, suffix);
    log::info!("Saving output in {out_path:?}.");
    std::fs::write(&out_path, format!("{document}\n"))
        .with_context(|| format!("couldn't save purged schema to {out_path:?}"))?;
    Ok(out_path)
}
