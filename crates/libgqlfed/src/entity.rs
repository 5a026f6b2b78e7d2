use crate::DeclarationKey;
use crate::EntityHeader;
use crate::EntityKey;
use crate::EntityKind;
use crate::EnumDeclaration;
use crate::EnumValue;
use crate::Field;
use crate::LeafDeclaration;
use crate::Param;
use crate::StructDeclaration;

/// A borrowed view of any entity in a document, declaration or member.
///
/// This is the closed set of variants consumers match on when they need to
/// treat every kind of entity uniformly (for instance to emit one diagram
/// node per entity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entity<'doc> {
    Scalar(&'doc LeafDeclaration),
    Directive(&'doc LeafDeclaration),
    Schema(&'doc LeafDeclaration),
    Enum(&'doc EnumDeclaration),
    Input(&'doc StructDeclaration),
    Type(&'doc StructDeclaration),
    Field(&'doc Field),
    Param(&'doc Param),
    EnumValue(&'doc EnumValue),
}

impl<'doc> Entity<'doc> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Scalar(_) => EntityKind::Scalar,
            Entity::Directive(_) => EntityKind::Directive,
            Entity::Schema(_) => EntityKind::Schema,
            Entity::Enum(_) => EntityKind::Enum,
            Entity::Input(_) => EntityKind::Input,
            Entity::Type(_) => EntityKind::Type,
            Entity::Field(_) => EntityKind::Field,
            Entity::Param(_) => EntityKind::Param,
            Entity::EnumValue(_) => EntityKind::EnumValue,
        }
    }

    pub fn header(&self) -> &'doc EntityHeader {
        match *self {
            Entity::Scalar(d)
                | Entity::Directive(d)
                | Entity::Schema(d) => &d.header,
            Entity::Enum(d) => &d.header,
            Entity::Input(d)
                | Entity::Type(d) => &d.header,
            Entity::Field(f) => &f.header,
            Entity::Param(p) => &p.header,
            Entity::EnumValue(v) => &v.header,
        }
    }

    pub fn name(&self) -> &'doc str {
        self.header().name()
    }

    pub fn alpha_name(&self) -> &'doc str {
        self.header().alpha_name()
    }

    pub fn comment(&self) -> Option<&'doc str> {
        self.header().comment()
    }

    pub fn key(&self) -> EntityKey {
        match *self {
            Entity::Field(f) => f.key().into(),
            Entity::Param(p) => p.key().into(),
            Entity::EnumValue(v) => v.key(),
            _ => EntityKey::Declaration(DeclarationKey::new(
                self.kind(),
                self.name(),
            )),
        }
    }

    /// An identifier for this entity that is unique within a document and
    /// stable across runs: the alpha-name, an underscore, then the hex digest
    /// of the entity's [`EntityKey`].
    ///
    /// The alpha-name alone is not unique (`type User` and `input User` share
    /// it, as do same-named fields on different structs), hence the digest.
    pub fn unique_id(&self) -> String {
        format!("{}_{:x}", self.alpha_name(), self.key().digest())
    }
}
