//! Lexical primitives shared by the template parser.

use super::cursor::Cursor;

/// Outcome of a quoted-string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringMatch<'a> {
    /// A complete string: contents with the quotes stripped, escape
    /// sequences left verbatim.
    Matched(&'a str),
    /// The cursor is not positioned at a quote. The cursor is unchanged.
    NotMatched,
    /// An opening quote with no matching close before end of input.
    Unterminated,
}

/// Advance past spaces, tabs and newlines.
pub fn skip_whitespace(cursor: &mut Cursor<'_>) {
    while matches!(cursor.head(), Some(' ' | '\t' | '\n')) {
        cursor.advance(1);
    }
}

/// Consume `literal` if the input continues with it.
///
/// Atomic: the cursor moves past the literal on a match and stays put
/// otherwise.
pub fn skip_literal_if_present(cursor: &mut Cursor<'_>, literal: &str) -> bool {
    if cursor.slice_from(literal.len()) != literal {
        return false;
    }
    cursor.advance(literal.len());
    true
}

/// Match a quoted string at the cursor.
///
/// Requires `'` or `"` at the head; scans to the matching close quote that
/// is not preceded by a backslash and leaves the cursor just past it. The
/// scan is bounded by the end of input.
pub fn match_quoted_string<'a>(cursor: &mut Cursor<'a>) -> StringMatch<'a> {
    let Some(quote) = cursor.head() else {
        return StringMatch::NotMatched;
    };
    if quote != '\'' && quote != '"' {
        return StringMatch::NotMatched;
    }

    let start = cursor.position();
    cursor.advance(1);
    while let Some(current) = cursor.head() {
        if current == quote && cursor.look_back(1) != Some('\\') {
            let contents = &cursor.input()[start + 1..cursor.position()];
            cursor.advance(1);
            return StringMatch::Matched(contents);
        }
        cursor.advance(current.len_utf8());
    }
    StringMatch::Unterminated
}

/// Advance the cursor to the next occurrence of `literal`.
///
/// Leaves the cursor at the match start and returns `true`, or at the end
/// of input and returns `false`. Naive linear scan; correctness over
/// asymptotics.
pub fn seek_literal(cursor: &mut Cursor<'_>, literal: &str) -> bool {
    while cursor.has_more() {
        if cursor.slice_from(literal.len()) == literal {
            return true;
        }
        let step = cursor.head().map_or(1, char::len_utf8);
        cursor.advance(step);
    }
    false
}
