/// A keyword that introduces one of the top-level declarations recognized by
/// the [`SdlParser`](crate::SdlParser).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SdlKeyword {
    Scalar,
    Enum,
    Input,
    Type,
    Directive,
    Schema,
}

impl SdlKeyword {
    /// Every keyword, in the order the parser tries them.
    pub const ALL: [SdlKeyword; 6] = [
        SdlKeyword::Scalar,
        SdlKeyword::Enum,
        SdlKeyword::Input,
        SdlKeyword::Type,
        SdlKeyword::Directive,
        SdlKeyword::Schema,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SdlKeyword::Scalar => "scalar",
            SdlKeyword::Enum => "enum",
            SdlKeyword::Input => "input",
            SdlKeyword::Type => "type",
            SdlKeyword::Directive => "directive",
            SdlKeyword::Schema => "schema",
        }
    }

    /// Whether the declaration's body is delimited by `{` and `}` (as opposed
    /// to ending at the end of the line).
    pub fn is_brace_bodied(&self) -> bool {
        match self {
            SdlKeyword::Enum
                | SdlKeyword::Input
                | SdlKeyword::Type
                | SdlKeyword::Schema => true,
            SdlKeyword::Scalar
                | SdlKeyword::Directive => false,
        }
    }

    /// Finds the keyword that `text` starts with, if any.
    ///
    /// This is a plain prefix match: `typeface` matches [`SdlKeyword::Type`].
    pub fn match_prefix(text: &str) -> Option<SdlKeyword> {
        Self::ALL.into_iter().find(|kw| text.starts_with(kw.as_str()))
    }
}

impl std::fmt::Display for SdlKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
