use crate::EntityHeader;
use crate::Field;

/// The shared shape of `type` and `input` declarations: a name and an ordered
/// list of [`Field`]s.
///
/// The struct exclusively owns its fields. Callers can rewrite field comments
/// and remove fields, but the relative order of the remaining fields is
/// always the order they were parsed in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StructDeclaration {
    pub(crate) header: EntityHeader,
    pub(crate) fields: Vec<Field>,
}

impl StructDeclaration {
    pub(crate) fn new(
        name: impl Into<String>,
        comment: Option<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            header: EntityHeader::new(name, comment),
            fields,
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

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, idx: usize) -> Option<&mut Field> {
        self.fields.get_mut(idx)
    }

    /// Mutable access to each field in order, e.g. to rewrite comments.
    pub fn fields_mut(&mut self) -> std::slice::IterMut<'_, Field> {
        self.fields.iter_mut()
    }

    /// Keeps only the fields for which `keep` returns `true`, preserving
    /// their order.
    pub fn retain_fields(&mut self, keep: impl FnMut(&Field) -> bool) {
        self.fields.retain(keep)
    }

    /// Removes and returns the field at `idx`, shifting later fields up.
    pub fn remove_field(&mut self, idx: usize) -> Option<Field> {
        if idx < self.fields.len() {
            Some(self.fields.remove(idx))
        } else {
            None
        }
    }
}
