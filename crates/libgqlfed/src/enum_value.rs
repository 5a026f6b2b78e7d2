use crate::EntityHeader;
use crate::EntityKey;

/// A value declared in an [`EnumDeclaration`](crate::EnumDeclaration)'s body.
///
/// The name includes any directive annotation written after the value on the
/// same line (e.g. `"OLD @deprecated"`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue {
    pub(crate) header: EntityHeader,
}

impl EnumValue {
    pub(crate) fn new(name: impl Into<String>, comment: Option<String>) -> Self {
        Self {
            header: EntityHeader::new(name, comment),
        }
    }

    pub fn header(&self) -> &EntityHeader {
        &self.header
    }

    pub fn name(&self) -> &str {
        self.header.name()
    }

    pub fn alpha_name(&self) -> &str {
        self.header.alpha_name()
    }

    pub fn comment(&self) -> Option<&str> {
        self.header.comment()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.header.set_comment(comment)
    }

    // TODO: Scope this by the owning enum once callers stop relying on
    //       values being keyed by name alone.
    pub fn key(&self) -> EntityKey {
        EntityKey::EnumValue {
            name: self.header.name().to_string(),
        }
    }
}
