//! Tests for [`crate::ReferenceGraph`] resolution and the document's cached
//! graph.

use crate::ReferenceGraph;
use crate::clean_type_name;
use crate::tests::utils::parse;

// =============================================================================
// Type name cleaning
// =============================================================================

#[test]
fn clean_type_name_strips_modifiers() {
    assert_eq!(clean_type_name("String"), "String");
    assert_eq!(clean_type_name("ID!"), "ID");
    assert_eq!(clean_type_name("[User!]!"), "User");
    assert_eq!(clean_type_name("[[Float]]"), "Float");
}

#[test]
fn clean_type_name_strips_defaults_and_annotations() {
    assert_eq!(clean_type_name("Int = 5"), "Int");
    assert_eq!(clean_type_name("Int=5"), "Int");
    assert_eq!(clean_type_name("String @deprecated"), "String");
    assert_eq!(clean_type_name("  [Role!] = [ADMIN] @auth"), "Role");
    assert_eq!(clean_type_name(""), "");
}

// =============================================================================
// Edges
// =============================================================================

#[test]
fn undeclared_types_produce_no_edges() {
    let document = parse("type A { name: String }");
    let graph = document.graph();
    assert_eq!(graph.len(), 1);
    assert!(graph.references(0).is_empty());
}

#[test]
fn field_return_type_produces_edge() {
    let document = parse("type A { b: B } type B { x: Int }");
    let graph = document.graph();
    assert_eq!(graph.references(0), &[1]);
    assert!(graph.references(1).is_empty());
    assert_eq!(graph.edge_count(), 1);

    let a_refs: Vec<_> = document.references_of(0).iter().map(|d| d.name()).collect();
    assert_eq!(a_refs, vec!["B"]);
}

#[test]
fn param_types_produce_edges_after_return_type() {
    let document = parse(concat!(
        "type Query {\n",
        "  user(filter: UserFilter!): User\n",
        "}\n",
        "input UserFilter {\n",
        "  role: Role\n",
        "}\n",
        "type User {\n",
        "  id: ID!\n",
        "}\n",
        "enum Role {\n",
        "  ADMIN\n",
        "}",
    ));
    let graph = document.graph();
    assert_eq!(graph.references(0), &[2, 1]);
    assert_eq!(graph.references(1), &[3]);
    assert!(graph.references(2).is_empty());
    assert!(graph.references(3).is_empty());
}

#[test]
fn scalars_are_never_targets() {
    let document = parse("scalar Date\ntype Event {\n  at: Date!\n}");
    assert!(document.graph().references(1).is_empty());
}

#[test]
fn duplicate_references_are_collapsed() {
    let document = parse(concat!(
        "type A {\n",
        "  one: B\n",
        "  many: [B!]!\n",
        "  byId(id: ID): B\n",
        "}\n",
        "type B {\n",
        "  back: A\n",
        "}",
    ));
    let graph = document.graph();
    assert_eq!(graph.references(0), &[1]);
    assert_eq!(graph.references(1), &[0]);
}

#[test]
fn self_references_are_kept() {
    let document = parse("type Node {\n  parent: Node\n}");
    assert_eq!(document.graph().references(0), &[0]);
}

/// References resolve by alpha-name, so a declaration whose name carries an
/// `implements` clause is still a target.
#[test]
fn references_resolve_by_alpha_name() {
    let document = parse(concat!(
        "type User implements Node {\n",
        "  id: ID!\n",
        "}\n",
        "type Query {\n",
        "  me: User\n",
        "}",
    ));
    assert_eq!(document.graph().references(1), &[0]);
}

#[test]
fn every_declaration_has_an_entry() {
    let document = parse(concat!(
        "directive @key(fields: String!) on OBJECT\n",
        "scalar Date\n",
        "schema { query: Query }\n",
        "enum E { X }\n",
        "type Query { e: E }\n",
    ));
    let graph = document.graph();
    assert_eq!(graph.len(), document.declarations().len());
    let entries: Vec<_> = graph.iter().map(|(idx, refs)| (idx, refs.len())).collect();
    assert_eq!(entries, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 1)]);
}

#[test]
fn out_of_range_index_has_no_references() {
    let graph = ReferenceGraph::resolve(&[]);
    assert!(graph.is_empty());
    assert!(graph.references(3).is_empty());
}

// =============================================================================
// Caching
// =============================================================================

#[test]
fn graph_is_computed_once() {
    let document = parse("type A { b: B } type B { x: Int }");
    let first: *const ReferenceGraph = document.graph();
    let second: *const ReferenceGraph = document.graph();
    assert_eq!(first, second);
}

/// Mutating a document leaves the cached graph as it was until it is
/// explicitly invalidated.
#[test]
fn graph_is_stale_until_invalidated() {
    let mut document = parse("type A { b: B } type B { x: Int }");
    assert_eq!(document.graph().edge_count(), 1);

    document.retain_declarations(|d| d.name() != "B");
    assert_eq!(document.graph().edge_count(), 1);
    assert!(document.references_of(0).is_empty());

    document.invalidate_graph();
    assert_eq!(document.graph().len(), 1);
    assert_eq!(document.graph().edge_count(), 0);
}

#[test]
fn adjacency_pairs_declarations_with_targets() {
    let document = parse("type A { b: B } type B { x: Int }");
    let adjacency: Vec<_> = document
        .adjacency()
        .into_iter()
        .map(|(d, targets)| {
            (d.name(), targets.iter().map(|t| t.name()).collect::<Vec<_>>())
        })
        .collect();
    assert_eq!(adjacency, vec![("A", vec!["B"]), ("B", vec![])]);
}
