//! Various test utils.

use crate::purge::PurgeConfig;
use libgqlfed::SdlDocument;
use std::path::Path;
use std::path::PathBuf;

pub fn parse(source: &str) -> SdlDocument {
    match SdlDocument::parse(source) {
        Ok(document) => document,
        Err(err) => panic!("failed to parse `{source}`: {err}"),
    }
}

pub fn config(keep_patterns: &[&str], second_keep_patterns: &[&str]) -> PurgeConfig {
    let to_strings = |patterns: &[&str]| -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    };
    PurgeConfig::new(to_strings(keep_patterns), to_strings(second_keep_patterns))
        .unwrap_or_else(|err| panic!("invalid test config: {err}"))
}

/// Writes `content` to `relative_path` under `dir`, creating parent
/// directories as needed.
pub fn write_file(dir: &Path, relative_path: &str, content: &str) -> PathBuf {
    let path = dir.join(relative_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
