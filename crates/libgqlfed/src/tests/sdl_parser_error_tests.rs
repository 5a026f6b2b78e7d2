//! Tests for fatal parse errors.

use crate::SdlDocument;
use crate::SdlParseErrorKind;
use crate::tests::utils::parse_err;

// =============================================================================
// Missing terminators
// =============================================================================

/// Omitting the closing brace of any brace-bodied declaration is fatal rather
/// than yielding a truncated declaration.
#[test]
fn missing_closing_brace_is_fatal_for_every_brace_bodied_kind() {
    let cases = [
        ("enum Color { RED GREEN", "enum body"),
        ("input NewUser { name: String", "input body"),
        ("type User { name: String", "type body"),
        ("schema { query: Query", "schema body"),
    ];
    for (source, expected_context) in cases {
        let err = parse_err(source);
        assert_eq!(
            err.kind(),
            &SdlParseErrorKind::MissingTerminator {
                delimiter: "}",
                context: expected_context,
            },
            "unexpected error kind for `{source}`",
        );
        assert!(err.is_fatal());
        assert_eq!(err.offending_text(), source);
        assert_eq!(err.location().line(), 1);
        assert_eq!(err.location().column(), 1);
    }
}

#[test]
fn missing_closing_brace_after_valid_declarations() {
    let err = parse_err("scalar Date\n\ntype User {\n  born: Date\n");
    assert_eq!(
        err.kind(),
        &SdlParseErrorKind::MissingTerminator {
            delimiter: "}",
            context: "type body",
        },
    );
    assert_eq!(err.location().line(), 3);
    assert_eq!(err.offending_text(), "type User {");
}

/// An unclosed body doesn't absorb the declaration that follows it.
#[test]
fn missing_closing_brace_before_next_declaration() {
    let cases = [
        ("enum Color { RED GREEN\ntype A { b: B }", "enum body"),
        ("input NewUser { name: String\nenum Role { ADMIN }", "input body"),
        ("type A { b: B\ntype C { x: Int }", "type body"),
        ("schema { query: Query\ntype Query { me: User }", "schema body"),
    ];
    for (source, expected_context) in cases {
        let err = parse_err(source);
        assert_eq!(
            err.kind(),
            &SdlParseErrorKind::MissingTerminator {
                delimiter: "}",
                context: expected_context,
            },
            "unexpected error kind for `{source}`",
        );
        assert_eq!(err.location().line(), 1);
        assert_eq!(Some(err.offending_text()), source.lines().next());
    }
}

#[test]
fn missing_opening_brace() {
    let err = parse_err("type User name: String }");
    assert_eq!(
        err.kind(),
        &SdlParseErrorKind::MissingTerminator {
            delimiter: "{",
            context: "type body",
        },
    );
}

#[test]
fn missing_closing_paren_in_params() {
    let err = parse_err("type Query {\n  user(id: ID: User\n}");
    assert_eq!(
        err.kind(),
        &SdlParseErrorKind::MissingTerminator {
            delimiter: ")",
            context: "parameter list",
        },
    );
    assert_eq!(err.location().line(), 2);
    assert_eq!(err.location().column(), 7);
}

#[test]
fn unterminated_comment() {
    let err = parse_err("\"\"\"never closed\ntype A { a: Int }");
    assert_eq!(
        err.kind(),
        &SdlParseErrorKind::MissingTerminator {
            delimiter: "\"\"\"",
            context: "comment",
        },
    );
    assert_eq!(err.location().line(), 1);
}

#[test]
fn unterminated_comment_inside_body() {
    let err = parse_err("type A {\n  \"\"\"open\n  a: Int\n}");
    assert_eq!(
        err.kind(),
        &SdlParseErrorKind::MissingTerminator {
            delimiter: "\"\"\"",
            context: "comment",
        },
    );
    assert_eq!(err.location().line(), 2);
    assert_eq!(err.location().column(), 3);
}

// =============================================================================
// Missing separators
// =============================================================================

#[test]
fn field_without_colon() {
    let err = parse_err("type User { name String }");
    assert_eq!(
        err.kind(),
        &SdlParseErrorKind::MissingSeparator {
            separator: ":",
            context: "field",
        },
    );
    assert_eq!(err.location().column(), 13);
    assert_eq!(err.offending_text(), "name String }");
}

/// The `:` must be on the field's own line, so a missing one isn't papered
/// over by the next field's separator.
#[test]
fn field_without_colon_before_next_field() {
    let err = parse_err("type User {\n  name String\n  age: Int\n}");
    assert!(matches!(
        err.kind(),
        SdlParseErrorKind::MissingSeparator { context: "field", .. },
    ));
    assert_eq!(err.location().line(), 2);
}

#[test]
fn field_params_without_return_type_separator() {
    let err = parse_err("type Query {\n  user(id: ID) User\n}");
    assert!(matches!(
        err.kind(),
        SdlParseErrorKind::MissingSeparator { context: "field", .. },
    ));
}

#[test]
fn param_without_colon() {
    let err = parse_err("type Query {\n  user(id ID): User\n}");
    assert_eq!(
        err.kind(),
        &SdlParseErrorKind::MissingSeparator {
            separator: ":",
            context: "parameter",
        },
    );
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn error_display_includes_location_message_and_text() {
    let err = parse_err("enum Color { RED");
    assert_eq!(
        err.to_string(),
        "1:1: `enum` declaration has no closing `}`: `enum Color { RED`",
    );
}

#[test]
fn fatal_error_yields_no_document() {
    assert!(SdlDocument::parse("type A { a: Int }\nenum B { X").is_err());
}
