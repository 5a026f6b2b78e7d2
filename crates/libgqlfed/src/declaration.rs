use crate::DeclarationKey;
use crate::Entity;
use crate::EntityHeader;
use crate::EntityKind;
use crate::EnumDeclaration;
use crate::LeafDeclaration;
use crate::SdlKeyword;
use crate::StructDeclaration;

/// A top-level declaration in an [`SdlDocument`](crate::SdlDocument).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Declaration {
    Scalar(LeafDeclaration),
    Directive(LeafDeclaration),
    Schema(LeafDeclaration),
    Enum(EnumDeclaration),
    Input(StructDeclaration),
    Type(StructDeclaration),
}

impl Declaration {
    pub fn kind(&self) -> EntityKind {
        match self {
            Declaration::Scalar(_) => EntityKind::Scalar,
            Declaration::Directive(_) => EntityKind::Directive,
            Declaration::Schema(_) => EntityKind::Schema,
            Declaration::Enum(_) => EntityKind::Enum,
            Declaration::Input(_) => EntityKind::Input,
            Declaration::Type(_) => EntityKind::Type,
        }
    }

    pub fn keyword(&self) -> SdlKeyword {
        match self {
            Declaration::Scalar(_) => SdlKeyword::Scalar,
            Declaration::Directive(_) => SdlKeyword::Directive,
            Declaration::Schema(_) => SdlKeyword::Schema,
            Declaration::Enum(_) => SdlKeyword::Enum,
            Declaration::Input(_) => SdlKeyword::Input,
            Declaration::Type(_) => SdlKeyword::Type,
        }
    }

    pub fn header(&self) -> &EntityHeader {
        match self {
            Declaration::Scalar(d)
                | Declaration::Directive(d)
                | Declaration::Schema(d) => &d.header,
            Declaration::Enum(d) => &d.header,
            Declaration::Input(d)
                | Declaration::Type(d) => &d.header,
        }
    }

    fn header_mut(&mut self) -> &mut EntityHeader {
        match self {
            Declaration::Scalar(d)
                | Declaration::Directive(d)
                | Declaration::Schema(d) => &mut d.header,
            Declaration::Enum(d) => &mut d.header,
            Declaration::Input(d)
                | Declaration::Type(d) => &mut d.header,
        }
    }

    pub fn name(&self) -> &str {
        self.header().name()
    }

    pub fn alpha_name(&self) -> &str {
        self.header().alpha_name()
    }

    pub fn comment(&self) -> Option<&str> {
        self.header().comment()
    }

    /// See [`EntityHeader::set_comment`].
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.header_mut().set_comment(comment)
    }

    pub fn key(&self) -> DeclarationKey {
        DeclarationKey::new(self.kind(), self.name())
    }

    pub fn as_entity(&self) -> Entity<'_> {
        match self {
            Declaration::Scalar(d) => Entity::Scalar(d),
            Declaration::Directive(d) => Entity::Directive(d),
            Declaration::Schema(d) => Entity::Schema(d),
            Declaration::Enum(d) => Entity::Enum(d),
            Declaration::Input(d) => Entity::Input(d),
            Declaration::Type(d) => Entity::Type(d),
        }
    }

    pub fn as_struct(&self) -> Option<&StructDeclaration> {
        match self {
            Declaration::Input(d) | Declaration::Type(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_struct_mut(&mut self) -> Option<&mut StructDeclaration> {
        match self {
            Declaration::Input(d) | Declaration::Type(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDeclaration> {
        match self {
            Declaration::Enum(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_enum_mut(&mut self) -> Option<&mut EnumDeclaration> {
        match self {
            Declaration::Enum(d) => Some(d),
            _ => None,
        }
    }

    /// Whether other declarations can hold a reference to this one in the
    /// [`ReferenceGraph`](crate::ReferenceGraph). Only structs and enums can.
    pub fn is_reference_target(&self) -> bool {
        match self {
            Declaration::Enum(_)
                | Declaration::Input(_)
                | Declaration::Type(_) => true,
            Declaration::Scalar(_)
                | Declaration::Directive(_)
                | Declaration::Schema(_) => false,
        }
    }
}
