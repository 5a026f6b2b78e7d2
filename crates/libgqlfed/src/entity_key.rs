use crate::EntityKind;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Identity of a top-level declaration: its variant tag plus its name.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DeclarationKey {
    pub kind: EntityKind,
    pub name: String,
}

impl DeclarationKey {
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Identity of a [`Field`](crate::Field).
///
/// The `parent` link is what keeps two same-named fields of different
/// structs apart.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldKey {
    pub parent: DeclarationKey,
    pub name: String,
    pub return_type: String,
    pub params_text: Option<String>,
}

/// Identity of a [`Param`](crate::Param), scoped by the field that declares
/// it.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ParamKey {
    pub parent: FieldKey,
    pub name: String,
    pub type_name: String,
}

/// Composite identity of any entity in a document.
///
/// Enum values are identified by name alone: two enums declaring a value with
/// the same name produce equal keys.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EntityKey {
    Declaration(DeclarationKey),
    Field(FieldKey),
    Param(ParamKey),
    EnumValue {
        name: String,
    },
}

impl EntityKey {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityKey::Declaration(key) => key.kind,
            EntityKey::Field(_) => EntityKind::Field,
            EntityKey::Param(_) => EntityKind::Param,
            EntityKey::EnumValue { .. } => EntityKind::EnumValue,
        }
    }

    /// A 64-bit digest of this key.
    ///
    /// Uses [`DefaultHasher::new`], whose keys are fixed, so the digest of a
    /// given key is the same on every run of the same build.
    pub fn digest(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl From<DeclarationKey> for EntityKey {
    fn from(key: DeclarationKey) -> Self {
        EntityKey::Declaration(key)
    }
}

impl From<FieldKey> for EntityKey {
    fn from(key: FieldKey) -> Self {
        EntityKey::Field(key)
    }
}

impl From<ParamKey> for EntityKey {
    fn from(key: ParamKey) -> Self {
        EntityKey::Param(key)
    }
}
