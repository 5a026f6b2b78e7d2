//! A lightweight parser for GraphQL SDL files that keeps the textual shape of
//! what it reads.
//!
//! The parser recognizes `scalar`, `enum`, `input`, `type`, `directive` and
//! `schema` declarations along with their fields, parameters, enum values and
//! `"""` comments. It does not validate anything. Instead it aims to
//! reproduce its input closely enough that a parsed [`SdlDocument`] can be
//! edited (comments rewritten, declarations or members removed) and written
//! back out with [`WriteSdl`].
//!
//! References between declarations are resolved by type name into a
//! [`ReferenceGraph`], available through [`SdlDocument::graph`].
//!
//! ```
//! use libgqlfed::SdlDocument;
//!
//! let document = SdlDocument::parse("type A { b: B }\ntype B { x: Int }").unwrap();
//! let a_refs = document.references_of(0);
//! assert_eq!(a_refs.len(), 1);
//! assert_eq!(a_refs[0].name(), "B");
//! ```

mod declaration;
mod entity;
mod entity_header;
mod entity_key;
mod entity_kind;
mod enum_declaration;
mod enum_value;
mod field;
mod indentation;
mod leaf_declaration;
mod param;
mod reference_graph;
pub mod scanner;
mod sdl_document;
mod sdl_keyword;
mod sdl_parse_error;
mod sdl_parse_error_kind;
mod sdl_parser;
mod sdl_writer;
mod source_location;
mod struct_declaration;

pub use declaration::Declaration;
pub use entity::Entity;
pub use entity_header::EntityHeader;
pub use entity_key::DeclarationKey;
pub use entity_key::EntityKey;
pub use entity_key::FieldKey;
pub use entity_key::ParamKey;
pub use entity_kind::EntityKind;
pub use enum_declaration::EnumDeclaration;
pub use enum_value::EnumValue;
pub use field::Field;
pub use indentation::Indentation;
pub use leaf_declaration::LeafDeclaration;
pub use param::Param;
pub use reference_graph::clean_type_name;
pub use reference_graph::ReferenceGraph;
pub use sdl_document::SdlDocument;
pub use sdl_keyword::SdlKeyword;
pub use sdl_parse_error::SdlParseError;
pub use sdl_parse_error_kind::SdlParseErrorKind;
pub use sdl_parser::SdlParser;
pub use sdl_writer::WriteSdl;
pub use source_location::SourceLocation;
pub use struct_declaration::StructDeclaration;

#[cfg(test)]
mod tests;
