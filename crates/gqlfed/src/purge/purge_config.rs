use crate::ReadContentError;
use crate::file_reader;
use std::path::Path;

type Result<T> = std::result::Result<T, PurgeConfigError>;

/// Patterns that mark a comment as "keep this".
///
/// Loaded from YAML:
///
/// ```yaml
/// keepPatterns:
///   - "@GKeep"
/// secondKeepPatterns:  # optional
///   - "public"
/// ```
///
/// A comment is kept when it contains a keep pattern and, if any second
/// patterns are configured, one of them appears after that first match on
/// the same line.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(crate) struct PurgeConfig {
    keep_patterns: Vec<String>,

    #[serde(default)]
    second_keep_patterns: Vec<String>,
}

impl PurgeConfig {
    pub fn new(
        keep_patterns: Vec<String>,
        second_keep_patterns: Vec<String>,
    ) -> Result<Self> {
        Self {
            keep_patterns,
            second_keep_patterns,
        }.validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Self::new(config.keep_patterns, config.second_keep_patterns)
    }

    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading purge config from {path:?}.");
        let content = file_reader::read_content(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn keep_patterns(&self) -> &[String] {
        &self.keep_patterns
    }

    pub fn second_keep_patterns(&self) -> &[String] {
        &self.second_keep_patterns
    }

    /// The comment line that marks an entity as kept: the first keep pattern,
    /// followed by the first second pattern when there is one.
    pub fn keep_line(&self) -> String {
        let first = self.keep_patterns.first().map_or("", String::as_str);
        match self.second_keep_patterns.first() {
            Some(second) => format!("{first} {second}"),
            None => first.to_string(),
        }
    }

    fn validate(self) -> Result<Self> {
        if self.keep_patterns.is_empty() {
            return Err(PurgeConfigError::NoKeepPatterns);
        }
        let has_empty_pattern = self.keep_patterns
            .iter()
            .chain(&self.second_keep_patterns)
            .any(|pattern| pattern.is_empty());
        if has_empty_pattern {
            return Err(PurgeConfigError::EmptyPattern);
        }
        Ok(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum PurgeConfigError {
    #[error("`keepPatterns` must contain at least one pattern")]
    NoKeepPatterns,

    #[error("keep patterns must not be empty strings")]
    EmptyPattern,

    #[error("invalid purge config: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    ReadContent(#[from] ReadContentError),
}
