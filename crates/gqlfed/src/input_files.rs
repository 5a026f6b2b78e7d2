//! Resolution of the file and directory arguments of a command into the list
//! of GraphQL files to process.

use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// How deep directories given as inputs are searched.
pub(crate) const MAX_WALK_DEPTH: usize = 5;

/// Expands `paths` into the files to process, in argument order.
///
/// * Paths that don't exist are skipped with a warning.
/// * A path containing any of `exclusions` as a substring is skipped.
/// * Files are kept as given, regardless of extension.
/// * Directories are walked up to [`MAX_WALK_DEPTH`] levels deep, keeping the
///   files whose extension is one of `graphql_file_exts` (with or without a
///   leading `.`).
pub(crate) fn collect_input_files(
    paths: &[PathBuf],
    graphql_file_exts: &[String],
    exclusions: &[PathBuf],
) -> Vec<PathBuf> {
    let graphql_file_exts: HashSet<&str> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();
    let exclusions: Vec<String> =
        exclusions.iter()
            .map(|path| path.to_string_lossy().into_owned())
            .filter(|path| !path.is_empty())
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut file_paths = vec![];
    for path in paths {
        if !path.exists() {
            log::warn!("{path:?} doesn't exist, skipping.");
            continue;
        }
        if is_excluded(path, &exclusions) {
            log::debug!("Skipping excluded path {path:?}.");
            continue;
        }
        if path.is_file() {
            file_paths.push(path.to_path_buf());
            continue;
        }

        let walker = WalkDir::new(path)
            .max_depth(MAX_WALK_DEPTH)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:?}.");
                        continue;
                    }
                    if is_excluded(entry_path, &exclusions) {
                        log::debug!("Skipping excluded file {entry_path:?}.");
                        continue;
                    }
                    let has_graphql_ext = entry_path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| graphql_file_exts.contains(ext));
                    if has_graphql_ext {
                        log::trace!("Found GraphQL file at {entry_path:?}.");
                        file_paths.push(entry_path.to_path_buf());
                    } else {
                        log::trace!("Skipping non-GraphQL file: {entry_path:?}.");
                    }
                },

                Err(err) => log::warn!(
                    "Error while walking the files under {path:?}: {err}",
                ),
            }
        }
    }

    log::debug!("Found {} GraphQL files to process.", file_paths.len());
    file_paths
}

fn is_excluded(path: &Path, exclusions: &[String]) -> bool {
    let path = path.to_string_lossy();
    exclusions.iter().any(|exclusion| path.contains(exclusion.as_str()))
}
