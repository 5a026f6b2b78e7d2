//! Tests for the primitive cursor operations in [`crate::scanner`].

use crate::scanner;

#[test]
fn skip_whitespace_advances_to_next_non_whitespace() {
    assert_eq!(scanner::skip_whitespace("  \n\t a", 0), 5);
}

#[test]
fn skip_whitespace_is_idempotent_off_whitespace() {
    assert_eq!(scanner::skip_whitespace("a  b", 0), 0);
    assert_eq!(scanner::skip_whitespace("a  b", 3), 3);
}

#[test]
fn skip_whitespace_stops_at_end_of_text() {
    assert_eq!(scanner::skip_whitespace("a   ", 1), 4);
    assert_eq!(scanner::skip_whitespace("a", 5), 5);
}

#[test]
fn line_end_finds_next_line_feed() {
    assert_eq!(scanner::line_end("ab\ncd", 0), 2);
    assert_eq!(scanner::line_end("ab\ncd", 2), 2);
}

#[test]
fn line_end_without_line_feed_is_text_length() {
    assert_eq!(scanner::line_end("ab\ncd", 3), 5);
    assert_eq!(scanner::line_end("", 0), 0);
}

#[test]
fn token_end_stops_at_whitespace() {
    assert_eq!(scanner::token_end("foo bar", 0), 3);
    assert_eq!(scanner::token_end("foo bar", 4), 7);
}

#[test]
fn find_either_byte_returns_earliest_match() {
    assert_eq!(
        scanner::find_either_byte("name(id: ID): User", 0, b'(', b':'),
        Some(4),
    );
    assert_eq!(
        scanner::find_either_byte("name: User", 0, b'(', b':'),
        Some(4),
    );
    assert_eq!(scanner::find_either_byte("name User", 0, b'(', b':'), None);
}

/// Verifies that searches bounded by a prefix slice keep returning offsets
/// into the full text.
#[test]
fn rfind_byte_respects_prefix_bound() {
    let text = "{ a } b }";
    assert_eq!(scanner::rfind_byte(text, 1, b'}'), Some(8));
    assert_eq!(scanner::rfind_byte(&text[..5], 1, b'}'), Some(4));
    assert_eq!(scanner::rfind_byte(text, 9, b'}'), None);
}

#[test]
fn find_byte_searches_forward_from_pos() {
    assert_eq!(scanner::find_byte("a}b}", 0, b'}'), Some(1));
    assert_eq!(scanner::find_byte("a}b}", 2, b'}'), Some(3));
    assert_eq!(scanner::find_byte("a}b}", 4, b'}'), None);
}

#[test]
fn find_str_finds_comment_delimiter() {
    let text = "\"\"\"doc\"\"\" type";
    assert_eq!(scanner::find_str(text, 0, scanner::COMMENT_DELIMITER), Some(0));
    assert_eq!(scanner::find_str(text, 3, scanner::COMMENT_DELIMITER), Some(6));
    assert_eq!(scanner::find_str(text, 9, scanner::COMMENT_DELIMITER), None);
}
