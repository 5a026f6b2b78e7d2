/// A point in an SDL source text.
///
/// # Indexing Convention
///
/// Unlike the byte offset (0-based), `line` and `column` are 1-based so they
/// can be shown to users as-is. `column` counts characters, not bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Computes the line and column of `byte_offset` within `source`.
    ///
    /// Offsets past the end of `source` are clamped to its end.
    pub fn from_offset(source: &str, byte_offset: usize) -> Self {
        let byte_offset = byte_offset.min(source.len());
        let preceding = &source.as_bytes()[..byte_offset];
        let line = memchr::memchr_iter(b'\n', preceding).count() + 1;
        let line_start = memchr::memrchr(b'\n', preceding).map_or(0, |idx| idx + 1);
        let column = String::from_utf8_lossy(&preceding[line_start..])
            .chars()
            .count() + 1;
        Self {
            line,
            column,
            byte_offset,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
