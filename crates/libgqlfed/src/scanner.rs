//! Primitive cursor operations over an in-memory SDL buffer.
//!
//! Every function here takes the text to scan plus a byte offset into it and
//! returns another byte offset into the same text. Callers bound a search by
//! passing a prefix slice (`&source[..end]`) rather than a sub-slice, so that
//! every offset stays absolute with respect to the original source.

/// Opening and closing delimiter of an SDL comment (a GraphQL block string).
pub const COMMENT_DELIMITER: &str = "\"\"\"";

/// Advances `pos` past any whitespace.
///
/// Returns `pos` unchanged when it does not point at whitespace, and
/// `text.len()` when only whitespace remains.
pub fn skip_whitespace(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return pos;
    }
    match text[pos..].find(|c: char| !c.is_whitespace()) {
        Some(offset) => pos + offset,
        None => text.len(),
    }
}

/// Returns the index of the next line feed at or after `pos`, or the length
/// of `text` if there is none.
pub fn line_end(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    memchr::memchr(b'\n', &text.as_bytes()[pos..])
        .map_or(text.len(), |offset| pos + offset)
}

/// Returns the index of the first whitespace character at or after `pos`, or
/// the length of `text` if there is none.
pub fn token_end(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    match text[pos..].find(char::is_whitespace) {
        Some(offset) => pos + offset,
        None => text.len(),
    }
}

/// Forward search for `byte`, starting at `pos`.
pub fn find_byte(text: &str, pos: usize, byte: u8) -> Option<usize> {
    if pos >= text.len() {
        return None;
    }
    memchr::memchr(byte, &text.as_bytes()[pos..]).map(|offset| pos + offset)
}

/// Backward search for `byte` from the end of `text`, never looking before
/// `pos`.
pub fn rfind_byte(text: &str, pos: usize, byte: u8) -> Option<usize> {
    if pos >= text.len() {
        return None;
    }
    memchr::memrchr(byte, &text.as_bytes()[pos..]).map(|offset| pos + offset)
}

/// Forward search for whichever of `first` or `second` occurs first.
pub fn find_either_byte(
    text: &str,
    pos: usize,
    first: u8,
    second: u8,
) -> Option<usize> {
    if pos >= text.len() {
        return None;
    }
    memchr::memchr2(first, second, &text.as_bytes()[pos..])
        .map(|offset| pos + offset)
}

/// Forward search for `needle`, starting at `pos`.
pub fn find_str(text: &str, pos: usize, needle: &str) -> Option<usize> {
    if pos >= text.len() {
        return None;
    }
    memchr::memmem::find(&text.as_bytes()[pos..], needle.as_bytes())
        .map(|offset| pos + offset)
}
