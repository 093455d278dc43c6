//! Recursive-descent parser for the `media-value` mini-language.
//!
//! A property value is free-form text with zero or more embedded calls:
//!
//! ```text
//! call        := "media-value" WS? '(' WS? clause-list? WS? ')'
//! clause-list := clause (',' WS? clause)* (',')?
//! clause      := 'case' WS? ':' WS? STRING WS? 'as' WS? ':' WS? STRING
//!              | 'else' WS? ':' WS? STRING
//! STRING      := single- or double-quoted, backslash keeps a quote inside
//! ```
//!
//! Parsing never validates the media query itself; queries are opaque
//! quoted strings.

mod cursor;
mod lexical;

pub use cursor::Cursor;
pub use lexical::{
    StringMatch, match_quoted_string, seek_literal, skip_literal_if_present, skip_whitespace,
};

use crate::error::{Error, Result};
use crate::template::{Case, PropertyTemplate, ResponsiveValue, Segment};

/// The call-name token recognized inside property values.
pub const CALL_NAME: &str = "media-value";

const CASE_KEYWORD: &str = "case";
const ELSE_KEYWORD: &str = "else";
const AS_KEYWORD: &str = "as";

enum Clause<'a> {
    Case { media: &'a str, value: &'a str },
    Else(&'a str),
}

/// Parse one property value.
///
/// Returns [`PropertyTemplate::Plain`] when no call opens anywhere in the
/// input — including when the call name appears without an argument list,
/// which reads as ordinary text. A call that opens `(` but violates the
/// clause grammar aborts the whole parse.
///
/// For a `Responsive` outcome, concatenating the `Text` segments and the
/// source of each call reproduces the input exactly: no text is dropped
/// around recognized calls.
pub fn parse_property(input: &str) -> Result<PropertyTemplate<'_>> {
    let mut cursor = Cursor::new(input);
    let mut segments = Vec::new();
    let mut text_start = 0;

    while cursor.has_more() {
        if !seek_literal(&mut cursor, CALL_NAME) {
            break;
        }
        let name_start = cursor.position();
        cursor.advance(CALL_NAME.len());
        let after_name = cursor.position();

        skip_whitespace(&mut cursor);
        let Some(clauses) = parse_argument_list(&mut cursor)? else {
            // Not a call after all; the name reads as ordinary text and the
            // pending text span stays open.
            cursor.set_position(after_name);
            continue;
        };
        let value = clauses_into_value(clauses)?;

        let prefix = &input[text_start..name_start];
        if !prefix.is_empty() {
            segments.push(Segment::Text(prefix));
        }
        segments.push(Segment::Value(value));
        text_start = cursor.position();
    }

    if segments.is_empty() {
        return Ok(PropertyTemplate::Plain);
    }

    let trailing = &input[text_start..];
    if !trailing.is_empty() {
        segments.push(Segment::Text(trailing));
    }
    Ok(PropertyTemplate::Responsive(segments))
}

/// Parse a parenthesized clause list.
///
/// Returns `Ok(None)` when the cursor is not at `(`; the cursor is left
/// untouched in that case. Any failure past the opening paren is a hard
/// error.
fn parse_argument_list<'a>(cursor: &mut Cursor<'a>) -> Result<Option<Vec<Clause<'a>>>> {
    if !skip_literal_if_present(cursor, "(") {
        return Ok(None);
    }

    let mut clauses = Vec::new();
    loop {
        skip_whitespace(cursor);
        if cursor.head() == Some(')') {
            break;
        }

        if skip_literal_if_present(cursor, CASE_KEYWORD) {
            skip_whitespace(cursor);
            if !skip_literal_if_present(cursor, ":") {
                return Err(Error::syntax("expected colon after \"case\""));
            }
            skip_whitespace(cursor);
            let media = expect_string(cursor, "expected media query string")?;

            skip_whitespace(cursor);
            if !skip_literal_if_present(cursor, AS_KEYWORD) {
                return Err(Error::syntax("expected \"as\" keyword"));
            }
            skip_whitespace(cursor);
            if !skip_literal_if_present(cursor, ":") {
                return Err(Error::syntax("expected colon after \"as\""));
            }
            skip_whitespace(cursor);
            let value = expect_string(cursor, "expected value string")?;

            skip_whitespace(cursor);
            clauses.push(Clause::Case { media, value });
        } else if skip_literal_if_present(cursor, ELSE_KEYWORD) {
            skip_whitespace(cursor);
            if !skip_literal_if_present(cursor, ":") {
                return Err(Error::syntax("expected colon after \"else\""));
            }
            skip_whitespace(cursor);
            let value = expect_string(cursor, "expected default value string")?;

            skip_whitespace(cursor);
            clauses.push(Clause::Else(value));
        } else {
            return Err(Error::syntax(
                "expected closing paren, case keyword, or else keyword",
            ));
        }

        if !skip_literal_if_present(cursor, ",") {
            break;
        }
    }

    skip_whitespace(cursor);
    if !skip_literal_if_present(cursor, ")") {
        return Err(Error::syntax("expected closing paren"));
    }
    Ok(Some(clauses))
}

fn expect_string<'a>(cursor: &mut Cursor<'a>, reason: &str) -> Result<&'a str> {
    match match_quoted_string(cursor) {
        StringMatch::Matched(contents) => Ok(contents),
        StringMatch::NotMatched => Err(Error::syntax(reason)),
        StringMatch::Unterminated => Err(Error::syntax("unterminated string")),
    }
}

fn clauses_into_value<'a>(clauses: Vec<Clause<'a>>) -> Result<ResponsiveValue<'a>> {
    let mut cases = Vec::new();
    let mut default = None;
    for clause in clauses {
        match clause {
            Clause::Case { media, value } => cases.push(Case { media, value }),
            Clause::Else(value) => {
                if default.is_some() {
                    return Err(Error::validation("multiple else clauses"));
                }
                default = Some(value);
            }
        }
    }
    Ok(ResponsiveValue { cases, default })
}
