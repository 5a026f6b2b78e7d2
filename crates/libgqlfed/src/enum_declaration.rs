use crate::EntityHeader;
use crate::EnumValue;

/// An `enum` declaration and its ordered values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumDeclaration {
    pub(crate) header: EntityHeader,
    pub(crate) values: Vec<EnumValue>,
}

impl EnumDeclaration {
    pub(crate) fn new(
        name: impl Into<String>,
        comment: Option<String>,
        values: Vec<EnumValue>,
    ) -> Self {
        Self {
            header: EntityHeader::new(name, comment),
            values,
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

    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn value_mut(&mut self, idx: usize) -> Option<&mut EnumValue> {
        self.values.get_mut(idx)
    }

    pub fn values_mut(&mut self) -> std::slice::IterMut<'_, EnumValue> {
        self.values.iter_mut()
    }

    /// Keeps only the values for which `keep` returns `true`, preserving
    /// their order.
    pub fn retain_values(&mut self, keep: impl FnMut(&EnumValue) -> bool) {
        self.values.retain(keep)
    }

    pub fn remove_value(&mut self, idx: usize) -> Option<EnumValue> {
        if idx < self.values.len() {
            Some(self.values.remove(idx))
        } else {
            None
        }
    }
}
