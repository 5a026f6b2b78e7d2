use crate::purge::PurgeConfig;
use libgqlfed::Declaration;
use libgqlfed::SdlDocument;
use libgqlfed::scanner;

/// Names of the `type` declarations that survive purging unconditionally.
const ALWAYS_KEPT_TYPE_NAMES: [&str; 2] = ["Query", "Mutation"];

/// Counts of what [`PurgeFilter::purge_document`] removed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct PurgeStats {
    pub declarations_removed: usize,
    pub fields_removed: usize,
    pub values_removed: usize,
}

/// Applies a [`PurgeConfig`] to parsed documents.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PurgeFilter<'cfg> {
    config: &'cfg PurgeConfig,
}

impl<'cfg> PurgeFilter<'cfg> {
    pub fn new(config: &'cfg PurgeConfig) -> Self {
        Self { config }
    }

    /// Whether `comment` carries a keep pattern (and, if second patterns are
    /// configured, one of them after it on the same line).
    pub fn should_keep(&self, comment: &str) -> bool {
        let second_patterns = self.config.second_keep_patterns();
        self.config.keep_patterns().iter().any(|pattern| {
            let Some(match_idx) = comment.find(pattern.as_str()) else {
                return false;
            };
            if second_patterns.is_empty() {
                return true;
            }
            let line = &comment[match_idx..scanner::line_end(comment, match_idx)];
            second_patterns
                .iter()
                .any(|second| line.contains(second.as_str()))
        })
    }

    /// Entities without a comment are never kept.
    pub fn is_kept(&self, comment: Option<&str>) -> bool {
        comment.is_some_and(|comment| self.should_keep(comment))
    }

    /// Removes every line of `comment` that contains a keep pattern.
    pub fn strip_keep_lines(&self, comment: &str) -> String {
        let mut stripped = comment.to_string();
        for pattern in self.config.keep_patterns() {
            while let Some(match_idx) = stripped.find(pattern.as_str()) {
                let line_start = stripped[..match_idx]
                    .rfind('\n')
                    .map_or(0, |newline_idx| newline_idx + 1);
                let line_end = scanner::line_end(&stripped, match_idx);
                let remove_end = (line_end + 1).min(stripped.len());
                stripped.replace_range(line_start..remove_end, "");
            }
        }
        stripped
    }

    /// Directives, schemas, scalars and the `Query` and `Mutation` types.
    pub fn always_kept(declaration: &Declaration) -> bool {
        match declaration {
            Declaration::Directive(_)
                | Declaration::Schema(_)
                | Declaration::Scalar(_) => true,
            Declaration::Type(type_declaration) =>
                ALWAYS_KEPT_TYPE_NAMES.contains(&type_declaration.alpha_name()),
            Declaration::Enum(_) | Declaration::Input(_) => false,
        }
    }

    /// Removes every declaration, field and enum value whose comment is not
    /// kept, then strips the keep lines from the comments of the survivors.
    pub fn purge_document(&self, document: &mut SdlDocument) -> PurgeStats {
        let keep_line = self.config.keep_line();
        for declaration in document.declarations_mut() {
            if Self::always_kept(declaration) {
                let comment = match declaration.comment() {
                    Some(comment) => format!("{keep_line}\n{comment}"),
                    None => format!("{keep_line}\n"),
                };
                declaration.set_comment(Some(comment));
            }
        }

        let mut stats = PurgeStats::default();
        let declaration_count = document.declarations().len();
        document.retain_declarations(|declaration| self.is_kept(declaration.comment()));
        stats.declarations_removed = declaration_count - document.declarations().len();

        for declaration in document.declarations_mut() {
            if let Some(struct_declaration) = declaration.as_struct_mut() {
                let field_count = struct_declaration.fields().len();
                struct_declaration.retain_fields(|field| self.is_kept(field.comment()));
                stats.fields_removed += field_count - struct_declaration.fields().len();
                for field in struct_declaration.fields_mut() {
                    let stripped = field.comment().map(|c| self.strip_keep_lines(c));
                    field.set_comment(stripped);
                }
            } else if let Some(enum_declaration) = declaration.as_enum_mut() {
                let value_count = enum_declaration.values().len();
                enum_declaration.retain_values(|value| self.is_kept(value.comment()));
                stats.values_removed += value_count - enum_declaration.values().len();
                for value in enum_declaration.values_mut() {
                    let stripped = value.comment().map(|c| self.strip_keep_lines(c));
                    value.set_comment(stripped);
                }
            }

            let stripped = declaration.comment().map(|c| self.strip_keep_lines(c));
            declaration.set_comment(stripped);
        }

        document.invalidate_graph();
        log::trace!("Purge removed {stats:?}.");
        stats
    }
}
