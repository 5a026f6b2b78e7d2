//! Hand-written scanner-driven parser for SDL documents.
//!
//! This module provides [`SdlParser`], which makes a single pass over an
//! in-memory SDL text and produces an [`SdlDocument`].
//!
//! # Architecture
//!
//! There is no tokenizer. The top-level loop is a small state machine
//! ([`ScanState`]) that skips whitespace, captures `"""` comments, and
//! dispatches on a keyword prefix. Each declaration kind then finds its own
//! boundaries with brace and line-end searches from the
//! [`scanner`](crate::scanner) module, and its body is handed to a
//! sub-parser (fields, parameters or enum values).
//!
//! # Declaration Windows
//!
//! A brace-bodied declaration's window runs from its keyword up to the first
//! `}` that follows it. Within that window, `enum` and `input` bodies close at
//! the first `}` after the opening brace while `type` and `schema` bodies
//! close at the last `}` of the window.
//!
//! # Errors
//!
//! A missing brace, parenthesis, comment delimiter or `:` separator aborts
//! the parse with an [`SdlParseError`]. Text that isn't a recognized
//! declaration is kept verbatim in the document's misc text and reported as
//! a non-fatal warning.

use crate::Declaration;
use crate::DeclarationKey;
use crate::EntityKind;
use crate::EnumDeclaration;
use crate::EnumValue;
use crate::Field;
use crate::FieldKey;
use crate::LeafDeclaration;
use crate::Param;
use crate::SdlDocument;
use crate::SdlKeyword;
use crate::SdlParseError;
use crate::SdlParseErrorKind;
use crate::SourceLocation;
use crate::StructDeclaration;
use crate::scanner;
use crate::scanner::COMMENT_DELIMITER;
use smallvec::SmallVec;

type Result<T> = std::result::Result<T, SdlParseError>;

// =============================================================================
// Top-level scan states
// =============================================================================

/// States of the top-level scan loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState {
    /// Advance to the next non-whitespace character.
    SkipWhitespace,
    /// Capture a `"""` comment if one starts here.
    MaybeComment,
    /// Try to recognize a declaration keyword here.
    DispatchKeyword,
    /// Nothing recognized: keep the rest of the line as misc text.
    Misc,
}

/// A comment captured ahead of the entity it documents.
struct PendingComment<'src> {
    body: &'src str,
    offset: usize,
}

// =============================================================================
// Parser
// =============================================================================

/// Parses SDL text into an [`SdlDocument`].
///
/// # Usage
///
/// ```
/// use libgqlfed::SdlParser;
///
/// let document = SdlParser::new("enum Color { RED GREEN }")
///     .parse_document()
///     .unwrap();
/// assert_eq!(document.declarations().len(), 1);
/// ```
pub struct SdlParser<'src> {
    source: &'src str,
    warnings: Vec<SdlParseError>,
}

impl<'src> SdlParser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            warnings: vec![],
        }
    }

    /// Parses the whole source text.
    ///
    /// Returns the first fatal error encountered, if any. No partial
    /// document is ever returned.
    pub fn parse_document(mut self) -> Result<SdlDocument> {
        let source = self.source;
        let mut declarations = vec![];
        let mut misc = String::new();
        let mut pending_comment: Option<PendingComment<'src>> = None;
        let mut pos = 0;
        let mut state = ScanState::SkipWhitespace;

        loop {
            match state {
                ScanState::SkipWhitespace => {
                    pos = scanner::skip_whitespace(source, pos);
                    if pos >= source.len() {
                        break;
                    }
                    state = ScanState::MaybeComment;
                },

                ScanState::MaybeComment => {
                    state = match self.scan_comment(source, pos)? {
                        Some((body, next_pos)) => {
                            let replaced = pending_comment.replace(PendingComment {
                                body,
                                offset: pos,
                            });
                            if let Some(replaced) = replaced {
                                self.warn_dangling_comment(&replaced);
                            }
                            pos = next_pos;
                            ScanState::SkipWhitespace
                        },
                        None => ScanState::DispatchKeyword,
                    };
                },

                ScanState::DispatchKeyword => {
                    state = match SdlKeyword::match_prefix(&source[pos..]) {
                        Some(keyword) => {
                            let comment = pending_comment
                                .take()
                                .map(|comment| comment.body.to_string());
                            let (declaration, next_pos) =
                                self.parse_declaration(keyword, pos, comment)?;
                            tracing::debug!(
                                "Parsed `{keyword}` declaration `{}`.",
                                declaration.name(),
                            );
                            declarations.push(declaration);
                            pos = next_pos;
                            ScanState::SkipWhitespace
                        },
                        None => ScanState::Misc,
                    };
                },

                ScanState::Misc => {
                    let end = scanner::line_end(source, pos);
                    let line = &source[pos..end];
                    misc.push_str(line);
                    misc.push('\n');
                    if !line.starts_with('#') {
                        tracing::warn!(
                            "Text `{line}` was not recognized and will be kept \
                            as-is.",
                        );
                        let warning = self.error(
                            SdlParseErrorKind::UnrecognizedText,
                            "text does not start a recognized declaration",
                            pos,
                        );
                        self.warnings.push(warning);
                    }
                    pos = end;
                    state = ScanState::SkipWhitespace;
                },
            }
        }

        if let Some(dangling) = pending_comment {
            self.warn_dangling_comment(&dangling);
        }

        Ok(SdlDocument::from_parts(declarations, misc, self.warnings))
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_declaration(
        &mut self,
        keyword: SdlKeyword,
        start: usize,
        comment: Option<String>,
    ) -> Result<(Declaration, usize)> {
        let header_start = start + keyword.as_str().len();
        if !keyword.is_brace_bodied() {
            let (leaf, end) = self.parse_leaf(header_start, comment);
            let declaration = match keyword {
                SdlKeyword::Directive => Declaration::Directive(leaf),
                _ => Declaration::Scalar(leaf),
            };
            return Ok((declaration, end));
        }
        match keyword {
            SdlKeyword::Schema => self.parse_schema(start, header_start, comment),
            SdlKeyword::Enum => self.parse_enum(start, header_start, comment),
            _ => self.parse_struct(keyword, start, header_start, comment),
        }
    }

    /// Scalars and directives end at the end of their line. Everything after
    /// the keyword is the name.
    fn parse_leaf(
        &self,
        header_start: usize,
        comment: Option<String>,
    ) -> (LeafDeclaration, usize) {
        let end = scanner::line_end(self.source, header_start);
        let leaf = LeafDeclaration::new(self.source[header_start..end].trim(), comment);
        (leaf, end)
    }

    /// Returns the end (exclusive) of a brace-bodied declaration's window:
    /// just past the first `}` following its keyword.
    fn window_end(
        &self,
        keyword: SdlKeyword,
        start: usize,
        header_start: usize,
    ) -> Result<usize> {
        scanner::find_byte(self.source, header_start, b'}')
            .map(|close_idx| close_idx + 1)
            .ok_or_else(|| self.error(
                SdlParseErrorKind::MissingTerminator {
                    delimiter: "}",
                    context: body_context(keyword),
                },
                format!("`{keyword}` declaration has no closing `}}`"),
                start,
            ))
    }

    /// Finds the `{` opening a declaration body, returning its index.
    fn find_open_brace(
        &self,
        keyword: SdlKeyword,
        start: usize,
        header_start: usize,
        window_end: usize,
    ) -> Result<usize> {
        scanner::find_byte(&self.source[..window_end], header_start, b'{')
            .ok_or_else(|| self.error(
                SdlParseErrorKind::MissingTerminator {
                    delimiter: "{",
                    context: body_context(keyword),
                },
                format!("`{keyword}` declaration has no opening `{{`"),
                start,
            ))
    }

    /// Finds the `}` closing a declaration body, returning its index.
    ///
    /// Bodies don't nest, so a `{` before the closing brace means this body
    /// was never closed and the brace found belongs to a later declaration.
    fn find_close_brace(
        &self,
        keyword: SdlKeyword,
        start: usize,
        open_idx: usize,
        window_end: usize,
    ) -> Result<usize> {
        let window = &self.source[..window_end];
        let close_idx = match keyword {
            SdlKeyword::Enum | SdlKeyword::Input =>
                scanner::find_byte(window, open_idx + 1, b'}'),
            _ => scanner::rfind_byte(window, open_idx + 1, b'}'),
        };
        match close_idx {
            Some(close_idx)
                if !self.source[open_idx + 1..close_idx].contains('{') => Ok(close_idx),
            _ => Err(self.error(
                SdlParseErrorKind::MissingTerminator {
                    delimiter: "}",
                    context: body_context(keyword),
                },
                format!("`{keyword}` declaration has no closing `}}`"),
                start,
            )),
        }
    }

    /// The schema body isn't modeled: everything from the first non-blank
    /// character after `schema` through the closing brace is kept as its
    /// name.
    fn parse_schema(
        &mut self,
        start: usize,
        header_start: usize,
        comment: Option<String>,
    ) -> Result<(Declaration, usize)> {
        let window_end = self.window_end(SdlKeyword::Schema, start, header_start)?;
        let name_start = scanner::skip_whitespace(self.source, header_start);
        let close_idx = self.find_close_brace(
            SdlKeyword::Schema,
            start,
            name_start,
            window_end,
        )?;
        let name = &self.source[name_start..=close_idx];
        Ok((
            Declaration::Schema(LeafDeclaration::new(name, comment)),
            close_idx + 1,
        ))
    }

    fn parse_enum(
        &mut self,
        start: usize,
        header_start: usize,
        comment: Option<String>,
    ) -> Result<(Declaration, usize)> {
        let window_end = self.window_end(SdlKeyword::Enum, start, header_start)?;
        let open_idx = self.find_open_brace(
            SdlKeyword::Enum,
            start,
            header_start,
            window_end,
        )?;
        let close_idx = self.find_close_brace(
            SdlKeyword::Enum,
            start,
            open_idx,
            window_end,
        )?;
        let name = self.source[header_start..open_idx].trim();
        let values = self.parse_enum_values(open_idx + 1, close_idx)?;
        Ok((
            Declaration::Enum(EnumDeclaration::new(name, comment, values)),
            close_idx + 1,
        ))
    }

    fn parse_struct(
        &mut self,
        keyword: SdlKeyword,
        start: usize,
        header_start: usize,
        comment: Option<String>,
    ) -> Result<(Declaration, usize)> {
        let window_end = self.window_end(keyword, start, header_start)?;
        let open_idx = self.find_open_brace(keyword, start, header_start, window_end)?;
        let close_idx = self.find_close_brace(keyword, start, open_idx, window_end)?;
        let name = self.source[header_start..open_idx].trim();
        let key = DeclarationKey::new(EntityKind::from(keyword), name);
        let fields = self.parse_fields(&key, open_idx + 1, close_idx)?;
        let declaration = StructDeclaration::new(name, comment, fields);
        let declaration = match keyword {
            SdlKeyword::Input => Declaration::Input(declaration),
            _ => Declaration::Type(declaration),
        };
        Ok((declaration, close_idx + 1))
    }

    // =========================================================================
    // Bodies
    // =========================================================================

    /// Parses the field records between `start` and `end` (the body of a
    /// `type` or `input`, braces excluded).
    fn parse_fields(
        &mut self,
        parent: &DeclarationKey,
        start: usize,
        end: usize,
    ) -> Result<Vec<Field>> {
        let source = self.source;
        let body = &source[..end];
        let mut fields = vec![];
        let mut pos = start;
        loop {
            pos = scanner::skip_whitespace(body, pos);
            if pos >= end {
                break;
            }

            let comment = match self.scan_comment(body, pos)? {
                Some((comment_body, next_pos)) => {
                    let comment_pos = pos;
                    pos = scanner::skip_whitespace(body, next_pos);
                    if pos >= end {
                        self.warn_dangling_comment(&PendingComment {
                            body: comment_body,
                            offset: comment_pos,
                        });
                        break;
                    }
                    Some(comment_body.to_string())
                },
                None => None,
            };

            // Names, the opening `(` and the `:` separator all sit on the
            // field's first line. A parameter list may span several lines.
            let line = &body[..scanner::line_end(body, pos)];
            let name_end = scanner::find_either_byte(line, pos, b'(', b':')
                .ok_or_else(|| self.missing_separator("field", pos))?;
            let name = body[pos..name_end].trim();

            let mut params_span = None;
            let mut colon_search_start = name_end;
            if body.as_bytes()[name_end] == b'(' {
                let close_idx = params_close(body, name_end + 1)
                    .ok_or_else(|| self.error(
                        SdlParseErrorKind::MissingTerminator {
                            delimiter: ")",
                            context: "parameter list",
                        },
                        format!("parameter list of field `{name}` has no closing `)`"),
                        name_end,
                    ))?;
                params_span = Some((name_end + 1, close_idx));
                colon_search_start = close_idx + 1;
            }

            let line = &body[..scanner::line_end(body, colon_search_start)];
            let colon_idx = scanner::find_byte(line, colon_search_start, b':')
                .ok_or_else(|| self.missing_separator("field", pos))?;
            let return_type_end = scanner::line_end(body, colon_idx + 1);
            let return_type = body[colon_idx + 1..return_type_end].trim();

            let mut field = Field::new(parent.clone(), name, return_type, comment);
            if let Some((params_start, params_end)) = params_span {
                let params_text = &body[params_start..params_end];
                if !params_text.trim().is_empty() {
                    let field_key = FieldKey {
                        params_text: Some(params_text.to_string()),
                        ..field.key()
                    };
                    let params = self.parse_params(&field_key, params_start, params_end)?;
                    field = field.with_params(params_text, params);
                }
            }
            fields.push(field);
            pos = return_type_end;
        }
        Ok(fields)
    }

    /// Parses the parameter records between `start` and `end` (the text
    /// between a field's parentheses).
    ///
    /// Commas between parameters are insignificant. A parameter's type runs
    /// to the next whitespace or comma, extended over any `= default` value
    /// and `@directive` annotations that follow it.
    fn parse_params(
        &mut self,
        parent: &FieldKey,
        start: usize,
        end: usize,
    ) -> Result<SmallVec<[Param; 2]>> {
        let source = self.source;
        let text = &source[..end];
        let mut params = SmallVec::new();
        let mut pos = start;
        loop {
            pos = skip_param_separators(text, pos);
            if pos >= end {
                break;
            }

            let comment = match self.scan_comment(text, pos)? {
                Some((comment_body, next_pos)) => {
                    let comment_pos = pos;
                    pos = skip_param_separators(text, next_pos);
                    if pos >= end {
                        self.warn_dangling_comment(&PendingComment {
                            body: comment_body,
                            offset: comment_pos,
                        });
                        break;
                    }
                    Some(comment_body.to_string())
                },
                None => None,
            };

            let colon_idx = scanner::find_byte(text, pos, b':')
                .ok_or_else(|| self.missing_separator("parameter", pos))?;
            let name = text[pos..colon_idx].trim();
            let type_start = scanner::skip_whitespace(text, colon_idx + 1);
            let type_end = param_type_end(text, type_start);
            let type_name = text[type_start..type_end].trim();

            params.push(Param::new(parent.clone(), name, type_name, comment));
            pos = type_end;
        }
        Ok(params)
    }

    /// Parses the enum values between `start` and `end` (the body of an
    /// `enum`, braces excluded).
    ///
    /// Values are whitespace-separated, so a line may declare several. An
    /// `@directive` following a value on the same line is part of that
    /// value's name.
    fn parse_enum_values(&mut self, start: usize, end: usize) -> Result<Vec<EnumValue>> {
        let source = self.source;
        let body = &source[..end];
        let mut values = vec![];
        let mut pending_comment: Option<PendingComment<'src>> = None;
        let mut pos = start;
        loop {
            pos = scanner::skip_whitespace(body, pos);
            if pos >= end {
                break;
            }

            if let Some((comment_body, next_pos)) = self.scan_comment(body, pos)? {
                let replaced = pending_comment.replace(PendingComment {
                    body: comment_body,
                    offset: pos,
                });
                if let Some(replaced) = replaced {
                    self.warn_dangling_comment(&replaced);
                }
                pos = next_pos;
                continue;
            }

            let mut value_end = scanner::token_end(body, pos);
            let annotation_start = skip_inline_whitespace(body, value_end);
            if body[annotation_start..].starts_with('@') {
                value_end = scanner::line_end(body, annotation_start);
            }
            let name = body[pos..value_end].trim();
            let comment = pending_comment
                .take()
                .map(|comment| comment.body.to_string());
            values.push(EnumValue::new(name, comment));
            pos = value_end;
        }

        if let Some(dangling) = pending_comment {
            self.warn_dangling_comment(&dangling);
        }
        Ok(values)
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// If a comment starts at `pos`, returns its body (delimiters excluded)
    /// and the index just past its closing delimiter.
    ///
    /// `text` bounds the search for the closing delimiter.
    fn scan_comment(
        &self,
        text: &'src str,
        pos: usize,
    ) -> Result<Option<(&'src str, usize)>> {
        if !text[pos..].starts_with(COMMENT_DELIMITER) {
            return Ok(None);
        }
        let body_start = pos + COMMENT_DELIMITER.len();
        match scanner::find_str(text, body_start, COMMENT_DELIMITER) {
            Some(body_end) => Ok(Some((
                &text[body_start..body_end],
                body_end + COMMENT_DELIMITER.len(),
            ))),
            None => Err(self.error(
                SdlParseErrorKind::MissingTerminator {
                    delimiter: COMMENT_DELIMITER,
                    context: "comment",
                },
                "comment has no closing `\"\"\"`",
                pos,
            )),
        }
    }

    fn warn_dangling_comment(&self, comment: &PendingComment<'_>) {
        let location = SourceLocation::from_offset(self.source, comment.offset);
        tracing::warn!(
            "Comment at {location} is not followed by anything it could \
            document and will be dropped: `{}`",
            comment.body.trim(),
        );
    }

    // =========================================================================
    // Errors
    // =========================================================================

    fn missing_separator(&self, context: &'static str, offset: usize) -> SdlParseError {
        self.error(
            SdlParseErrorKind::MissingSeparator {
                separator: ":",
                context,
            },
            format!("{context} has no `:` between its name and its type"),
            offset,
        )
    }

    /// Builds an error located at `offset` whose offending text is the rest
    /// of the line starting there.
    fn error(
        &self,
        kind: SdlParseErrorKind,
        message: impl Into<String>,
        offset: usize,
    ) -> SdlParseError {
        let end = scanner::line_end(self.source, offset);
        SdlParseError::new(
            kind,
            message,
            self.source[offset..end].trim_end(),
            SourceLocation::from_offset(self.source, offset),
        )
    }
}

fn body_context(keyword: SdlKeyword) -> &'static str {
    match keyword {
        SdlKeyword::Enum => "enum body",
        SdlKeyword::Input => "input body",
        SdlKeyword::Type => "type body",
        SdlKeyword::Schema => "schema body",
        SdlKeyword::Scalar => "scalar declaration",
        SdlKeyword::Directive => "directive declaration",
    }
}

/// Finds the `)` closing a parameter list whose contents start at `pos`,
/// stepping over the parenthesized arguments of directives and over string
/// literals.
fn params_close(text: &str, pos: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    for (offset, byte) in text.as_bytes()[pos.min(text.len())..].iter().enumerate() {
        match (byte, in_string) {
            (b'"', _) => in_string = !in_string,
            (_, true) => (),
            (b'(', false) => depth += 1,
            (b')', false) if depth == 0 => return Some(pos + offset),
            (b')', false) => depth -= 1,
            _ => (),
        }
    }
    None
}

fn skip_param_separators(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return pos;
    }
    match text[pos..].find(|c: char| !c.is_whitespace() && c != ',') {
        Some(offset) => pos + offset,
        None => text.len(),
    }
}

/// Like [`scanner::skip_whitespace`] but stops at line feeds.
fn skip_inline_whitespace(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return pos;
    }
    match text[pos..].find(|c: char| c == '\n' || !c.is_whitespace()) {
        Some(offset) => pos + offset,
        None => text.len(),
    }
}

/// End of a single type or value token: the next whitespace or comma.
fn param_token_end(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    match text[pos..].find(|c: char| c.is_whitespace() || c == ',') {
        Some(offset) => pos + offset,
        None => text.len(),
    }
}

fn param_type_end(text: &str, type_start: usize) -> usize {
    let mut end = param_token_end(text, type_start);
    loop {
        let next = scanner::skip_whitespace(text, end);
        end = match text.as_bytes().get(next) {
            Some(b'=') => default_value_end(text, scanner::skip_whitespace(text, next + 1)),
            Some(b'@') => directive_end(text, next),
            _ => return end,
        };
    }
}

/// End of a default value literal starting at `pos`. String, list and object
/// literals run to their closing delimiter (no nesting).
fn default_value_end(text: &str, pos: usize) -> usize {
    let closing = match text.as_bytes().get(pos) {
        Some(b'"') => b'"',
        Some(b'[') => b']',
        Some(b'{') => b'}',
        _ => return param_token_end(text, pos),
    };
    scanner::find_byte(text, pos + 1, closing).map_or(text.len(), |idx| idx + 1)
}

/// End of a `@name` or `@name(args)` annotation starting at `pos`.
fn directive_end(text: &str, pos: usize) -> usize {
    let name_end = text[pos + 1..]
        .find(|c: char| !c.is_alphanumeric() && c != '_')
        .map_or(text.len(), |offset| pos + 1 + offset);
    if text.as_bytes().get(name_end) == Some(&b'(') {
        scanner::find_byte(text, name_end + 1, b')').map_or(text.len(), |idx| idx + 1)
    } else {
        name_end
    }
}
