use crate::EntityHeader;
use crate::FieldKey;
use crate::ParamKey;
use crate::reference_graph::clean_type_name;

/// A parameter declared in a [`Field`](crate::Field)'s parenthesized
/// parameter list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Param {
    pub(crate) header: EntityHeader,
    pub(crate) parent: FieldKey,
    pub(crate) type_name: String,
}

impl Param {
    pub(crate) fn new(
        parent: FieldKey,
        name: impl Into<String>,
        type_name: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            header: EntityHeader::new(name, comment),
            parent,
            type_name: type_name.into(),
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

    /// The raw type text, including modifiers and any `= default` or
    /// directive annotation that followed it.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// The type with modifiers and trailing annotations stripped (e.g.
    /// `"[ID!]! = []"` becomes `"ID"`).
    pub fn clean_type(&self) -> String {
        clean_type_name(&self.type_name)
    }

    /// Key of the field this parameter belongs to.
    pub fn parent(&self) -> &FieldKey {
        &self.parent
    }

    pub fn key(&self) -> ParamKey {
        ParamKey {
            parent: self.parent.clone(),
            name: self.header.name().to_string(),
            type_name: self.type_name.clone(),
        }
    }
}
