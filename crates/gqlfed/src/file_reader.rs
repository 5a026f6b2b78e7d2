use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

const UTF8_BOM: char = '\u{feff}';

/// Reads a schema or config file as UTF-8 text, dropping a leading byte
/// order mark if there is one.
pub(crate) fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::Io {
            file_path: file_path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        })?;

    let mut content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::InvalidUtf8 {
            file_path: file_path.to_path_buf(),
            valid_up_to: err.utf8_error().valid_up_to(),
        })?;

    if content.starts_with(UTF8_BOM) {
        content.drain(..UTF8_BOM.len_utf8());
    }
    Ok(content)
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub(crate) enum ReadContentError {
    #[error("{file_path:?} is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("couldn't read {file_path:?}: {message}")]
    Io {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("{0:?} is not a file")]
    NotAFile(PathBuf),
}
