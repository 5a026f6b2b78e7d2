use crate::SdlParseErrorKind;
use crate::SourceLocation;

/// A problem found while parsing SDL text.
///
/// Fatal errors (see [`SdlParseErrorKind::is_fatal`]) are returned from
/// [`SdlParser::parse_document`](crate::SdlParser::parse_document) and no
/// partial document is produced. Non-fatal ones are collected on the
/// resulting document as [warnings](crate::SdlDocument::parse_warnings).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{location}: {message}: `{offending_text}`")]
pub struct SdlParseError {
    kind: SdlParseErrorKind,
    location: SourceLocation,
    message: String,
    offending_text: String,
}

impl SdlParseError {
    pub fn new(
        kind: SdlParseErrorKind,
        message: impl Into<String>,
        offending_text: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            location,
            message: message.into(),
            offending_text: offending_text.into(),
        }
    }

    pub fn kind(&self) -> &SdlParseErrorKind {
        &self.kind
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }

    /// Where in the source the problem was detected.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Human-readable description of the problem.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The source text the problem was found in (typically the line of the
    /// declaration, field or parameter being parsed).
    pub fn offending_text(&self) -> &str {
        self.offending_text.as_str()
    }
}
