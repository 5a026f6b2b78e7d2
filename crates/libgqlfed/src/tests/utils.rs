//! Various test utils.

use crate::Declaration;
use crate::EnumDeclaration;
use crate::SdlDocument;
use crate::SdlParseError;
use crate::StructDeclaration;

/// Parses `source`, panicking on a fatal error.
pub fn parse(source: &str) -> SdlDocument {
    match SdlDocument::parse(source) {
        Ok(document) => document,
        Err(err) => panic!("failed to parse `{source}`: {err}"),
    }
}

/// Parses `source`, panicking if it parses successfully.
pub fn parse_err(source: &str) -> SdlParseError {
    match SdlDocument::parse(source) {
        Ok(document) => panic!(
            "expected `{source}` to fail to parse, got: {document:#?}",
        ),
        Err(err) => err,
    }
}

pub fn as_struct(declaration: &Declaration) -> &StructDeclaration {
    declaration
        .as_struct()
        .unwrap_or_else(|| panic!("expected a struct, got: {declaration:#?}"))
}

pub fn as_enum(declaration: &Declaration) -> &EnumDeclaration {
    declaration
        .as_enum()
        .unwrap_or_else(|| panic!("expected an enum, got: {declaration:#?}"))
}

pub fn field_names(declaration: &Declaration) -> Vec<&str> {
    as_struct(declaration).fields().iter().map(|f| f.name()).collect()
}

pub fn value_names(declaration: &Declaration) -> Vec<&str> {
    as_enum(declaration).values().iter().map(|v| v.name()).collect()
}
