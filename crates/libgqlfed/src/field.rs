use crate::DeclarationKey;
use crate::EntityHeader;
use crate::FieldKey;
use crate::Param;
use crate::reference_graph::clean_type_name;
use smallvec::SmallVec;

/// A field of a [`StructDeclaration`](crate::StructDeclaration) (the body
/// entries of a `type` or `input`).
///
/// A field remembers which struct declared it (by key, not by reference), so
/// two fields with the same name and return type on different structs never
/// compare equal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    pub(crate) header: EntityHeader,
    pub(crate) params: SmallVec<[Param; 2]>,
    pub(crate) params_text: Option<String>,
    pub(crate) parent: DeclarationKey,
    pub(crate) return_type: String,
}

impl Field {
    pub(crate) fn new(
        parent: DeclarationKey,
        name: impl Into<String>,
        return_type: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            header: EntityHeader::new(name, comment),
            params: SmallVec::new(),
            params_text: None,
            parent,
            return_type: return_type.into(),
        }
    }

    pub(crate) fn with_params(
        mut self,
        params_text: impl Into<String>,
        params: SmallVec<[Param; 2]>,
    ) -> Self {
        self.params_text = Some(params_text.into());
        self.params = params;
        self
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

    /// See [`EntityHeader::set_comment`].
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.header.set_comment(comment)
    }

    /// The return type exactly as written after the `:`, which may include
    /// list/non-null modifiers, a default value, and directive annotations.
    pub fn return_type(&self) -> &str {
        self.return_type.as_str()
    }

    /// The return type reduced to the bare referenced type name.
    pub fn clean_return_type(&self) -> String {
        clean_type_name(&self.return_type)
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// The original text between the parameter list's parentheses. This is
    /// what gets written back out on serialization.
    pub fn params_text(&self) -> Option<&str> {
        self.params_text.as_deref()
    }

    /// Key of the struct this field belongs to.
    pub fn parent(&self) -> &DeclarationKey {
        &self.parent
    }

    pub fn key(&self) -> FieldKey {
        FieldKey {
            parent: self.parent.clone(),
            name: self.header.name().to_string(),
            return_type: self.return_type.clone(),
            params_text: self.params_text.clone(),
        }
    }
}
