use crate::Declaration;
use crate::Param;
use indexmap::IndexSet;
use std::collections::HashMap;

/// Adjacency list of named-type references between the top-level
/// declarations of a document.
///
/// Nodes are indices into the declaration list the graph was resolved from.
/// Every declaration has an entry (possibly empty). Only `type` and `input`
/// declarations have outgoing edges, and only `type`, `input` and `enum`
/// declarations can be targets.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReferenceGraph {
    adjacency: Vec<Vec<usize>>,
}

impl ReferenceGraph {
    /// Resolves references by matching the [clean](clean_type_name) return
    /// type of every field, and the clean type of every parameter, against
    /// the alpha-names of `declarations`.
    ///
    /// When two declarations share an alpha-name, the later one wins.
    pub fn resolve(declarations: &[Declaration]) -> Self {
        let by_alpha_name: HashMap<&str, usize> = declarations
            .iter()
            .enumerate()
            .map(|(idx, declaration)| (declaration.alpha_name(), idx))
            .collect();

        let adjacency = declarations
            .iter()
            .map(|declaration| {
                let Some(struct_declaration) = declaration.as_struct() else {
                    return vec![];
                };
                let mut targets = IndexSet::new();
                for field in struct_declaration.fields() {
                    let type_names = std::iter::once(field.clean_return_type())
                        .chain(field.params().iter().map(Param::clean_type));
                    for type_name in type_names {
                        if let Some(&target_idx) = by_alpha_name.get(type_name.as_str())
                            && declarations[target_idx].is_reference_target() {
                            targets.insert(target_idx);
                        }
                    }
                }
                targets.into_iter().collect()
            })
            .collect();

        Self { adjacency }
    }

    /// Number of nodes (one per declaration).
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Indices of the declarations referenced by the declaration at `idx`, in
    /// first-reference order. Empty for an out-of-range index.
    pub fn references(&self, idx: usize) -> &[usize] {
        self.adjacency.get(idx).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(idx, targets)| (idx, targets.as_slice()))
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// Reduces a raw field return type or parameter type to the bare name of the
/// type it refers to.
///
/// Drops any `= default` assignment, then everything after the first
/// whitespace (directive annotations), then the `!`, `[` and `]` modifiers.
///
/// ```
/// use libgqlfed::clean_type_name;
///
/// assert_eq!(clean_type_name("[User!]!"), "User");
/// assert_eq!(clean_type_name("Int = 10 @deprecated"), "Int");
/// ```
pub fn clean_type_name(raw: &str) -> String {
    let without_default = raw.split_once('=').map_or(raw, |(type_part, _)| type_part);
    let first_token = without_default.split_whitespace().next().unwrap_or_default();
    first_token
        .chars()
        .filter(|c| !matches!(c, '!' | '[' | ']'))
        .collect()
}
