use crate::Declaration;
use crate::Indentation;
use crate::ReferenceGraph;
use crate::SdlParseError;
use crate::SdlParser;
use crate::WriteSdl;
use std::cell::OnceCell;

/// A parsed SDL file: its top-level declarations in source order, plus any
/// text that wasn't recognized as a declaration ("misc" text).
///
/// The [`ReferenceGraph`] between declarations is computed on the first call
/// to [`graph`](Self::graph) and cached. Mutating the declarations afterwards
/// does not update it: call [`invalidate_graph`](Self::invalidate_graph) to
/// have it recomputed on next access.
///
/// A document is not meant to be mutated from several threads at once. No
/// internal locking is done.
#[derive(Clone, Debug, Default)]
pub struct SdlDocument {
    declarations: Vec<Declaration>,
    misc: String,
    parse_warnings: Vec<SdlParseError>,
    graph: OnceCell<ReferenceGraph>,
}

impl SdlDocument {
    /// Parses `source`. Shorthand for
    /// [`SdlParser::parse_document`](crate::SdlParser::parse_document).
    pub fn parse(source: &str) -> Result<Self, SdlParseError> {
        SdlParser::new(source).parse_document()
    }

    pub fn new(declarations: Vec<Declaration>, misc: impl Into<String>) -> Self {
        Self::from_parts(declarations, misc.into(), vec![])
    }

    pub(crate) fn from_parts(
        declarations: Vec<Declaration>,
        misc: String,
        parse_warnings: Vec<SdlParseError>,
    ) -> Self {
        Self {
            declarations,
            misc,
            parse_warnings,
            graph: OnceCell::new(),
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Mutable access to the declarations in place (e.g. to rewrite comments
    /// or filter members). The cached graph is left untouched.
    pub fn declarations_mut(&mut self) -> &mut [Declaration] {
        &mut self.declarations
    }

    /// Keeps only the declarations for which `keep` returns `true`,
    /// preserving their order. The cached graph is left untouched.
    pub fn retain_declarations(&mut self, keep: impl FnMut(&Declaration) -> bool) {
        self.declarations.retain(keep)
    }

    /// Replaces all declarations. The cached graph is left untouched.
    pub fn set_declarations(&mut self, declarations: Vec<Declaration>) {
        self.declarations = declarations;
    }

    /// Finds the first declaration with the given name.
    pub fn declaration_named(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    /// Unrecognized source text, one line per unrecognized line, each
    /// terminated by a line feed.
    pub fn misc(&self) -> &str {
        self.misc.as_str()
    }

    /// Non-fatal problems found while parsing this document.
    pub fn parse_warnings(&self) -> &[SdlParseError] {
        &self.parse_warnings
    }

    /// Returns the reference graph, resolving it on first access.
    pub fn graph(&self) -> &ReferenceGraph {
        self.graph.get_or_init(|| {
            let graph = ReferenceGraph::resolve(&self.declarations);
            tracing::debug!(
                "Resolved reference graph with {} nodes and {} edges.",
                graph.len(),
                graph.edge_count(),
            );
            graph
        })
    }

    /// Drops the cached reference graph so that the next call to
    /// [`graph`](Self::graph) recomputes it from the current declarations.
    pub fn invalidate_graph(&mut self) {
        self.graph.take();
    }

    /// The declarations referenced by the declaration at `idx`, as recorded
    /// in the (possibly stale) cached graph.
    ///
    /// Indices that no longer point at a declaration are skipped.
    pub fn references_of(&self, idx: usize) -> Vec<&Declaration> {
        self.graph()
            .references(idx)
            .iter()
            .filter_map(|&target_idx| self.declarations.get(target_idx))
            .collect()
    }

    /// Every declaration paired with the declarations it references.
    pub fn adjacency(&self) -> Vec<(&Declaration, Vec<&Declaration>)> {
        self.declarations
            .iter()
            .enumerate()
            .map(|(idx, declaration)| (declaration, self.references_of(idx)))
            .collect()
    }

    pub fn to_sdl_string(&self, indentation: &Indentation) -> String {
        WriteSdl::to_sdl_string(self, indentation)
    }
}

/// Documents compare by their declarations and misc text. Parse warnings and
/// the cached graph don't participate.
impl PartialEq for SdlDocument {
    fn eq(&self, other: &Self) -> bool {
        self.declarations == other.declarations && self.misc == other.misc
    }
}

impl std::fmt::Display for SdlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sdl_string(&Indentation::default()))
    }
}
