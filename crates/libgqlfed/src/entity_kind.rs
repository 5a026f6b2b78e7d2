use crate::SdlKeyword;

/// The variant tag shared by every entity in an [`SdlDocument`](crate::SdlDocument).
///
/// Top-level declarations map one-to-one onto an [`SdlKeyword`]; members
/// ([`EntityKind::Field`], [`EntityKind::Param`], [`EntityKind::EnumValue`])
/// have no keyword of their own.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EntityKind {
    Scalar,
    Directive,
    Schema,
    Enum,
    Input,
    Type,
    Field,
    Param,
    EnumValue,
}

impl EntityKind {
    pub fn keyword(&self) -> Option<SdlKeyword> {
        match self {
            EntityKind::Scalar => Some(SdlKeyword::Scalar),
            EntityKind::Directive => Some(SdlKeyword::Directive),
            EntityKind::Schema => Some(SdlKeyword::Schema),
            EntityKind::Enum => Some(SdlKeyword::Enum),
            EntityKind::Input => Some(SdlKeyword::Input),
            EntityKind::Type => Some(SdlKeyword::Type),
            EntityKind::Field
                | EntityKind::Param
                | EntityKind::EnumValue => None,
        }
    }

    /// The keyword text for declarations, `"member"` otherwise.
    pub fn tag(&self) -> &'static str {
        self.keyword().map_or("member", |kw| kw.as_str())
    }

    pub fn is_member(&self) -> bool {
        self.keyword().is_none()
    }
}

impl From<SdlKeyword> for EntityKind {
    fn from(keyword: SdlKeyword) -> Self {
        match keyword {
            SdlKeyword::Scalar => EntityKind::Scalar,
            SdlKeyword::Enum => EntityKind::Enum,
            SdlKeyword::Input => EntityKind::Input,
            SdlKeyword::Type => EntityKind::Type,
            SdlKeyword::Directive => EntityKind::Directive,
            SdlKeyword::Schema => EntityKind::Schema,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
