/// Categorizes [`SdlParseError`](crate::SdlParseError)s for programmatic
/// handling.
///
/// The `#[error(...)]` messages are concise. The full human-readable message
/// lives on the [`SdlParseError`](crate::SdlParseError) itself.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SdlParseErrorKind {
    /// An opening or closing delimiter (`{`, `}`, `)` or `"""`) was not found.
    ///
    /// # Example
    /// ```text
    /// enum Color { RED
    ///                 ^ expected `}`, found end of input
    /// ```
    #[error("missing `{delimiter}` for {context}")]
    MissingTerminator {
        delimiter: &'static str,
        context: &'static str,
    },

    /// A field or parameter has no `:` between its name and its type.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///             ^^^^ expected `:`
    /// ```
    #[error("missing `{separator}` in {context}")]
    MissingSeparator {
        separator: &'static str,
        context: &'static str,
    },

    /// Text that isn't part of any recognized declaration.
    ///
    /// This is never fatal: the text is kept in the document's misc text and
    /// parsing carries on with the next line.
    #[error("unrecognized text")]
    UnrecognizedText,
}

impl SdlParseErrorKind {
    /// Whether an error of this kind aborts the parse.
    pub fn is_fatal(&self) -> bool {
        match self {
            SdlParseErrorKind::MissingTerminator { .. }
                | SdlParseErrorKind::MissingSeparator { .. } => true,
            SdlParseErrorKind::UnrecognizedText => false,
        }
    }
}
