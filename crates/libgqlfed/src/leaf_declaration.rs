use crate::EntityHeader;

/// A `scalar`, `directive`, or `schema` declaration.
///
/// None of these have a modeled body. The name is everything after the
/// keyword: the rest of the line for scalars and directives (so a directive's
/// name includes its arguments and locations), and the whole verbatim
/// `{ ... }` block for a schema.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeafDeclaration {
    pub(crate) header: EntityHeader,
}

impl LeafDeclaration {
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
}
