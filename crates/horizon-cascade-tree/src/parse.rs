//! CSS parsing into a [`StyleSheet`] tree using the `cssparser` crate.
//!
//! The tokenizer drives structure recognition only: selectors, at-rule
//! preludes and declaration values are captured as raw source slices, so
//! quoted strings, nested parentheses and embedded expressions survive
//! exactly as written.

use cssparser::{BasicParseErrorKind, Delimiter, ParseErrorKind, Parser, ParserInput, Token};

use crate::node::{NodeId, NodeKind, StyleSheet};
use crate::{Error, Result};

type CssResult<'i, T> = std::result::Result<T, cssparser::ParseError<'i, Error>>;

/// Parse a CSS stylesheet string into a tree.
///
/// Parse errors are fatal: this is a rewriting tool, so a malformed input
/// aborts instead of being silently skipped.
pub(crate) fn parse_stylesheet(css: &str) -> Result<StyleSheet> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut sheet = StyleSheet::new();
    let root = sheet.root();

    parse_contents(&mut parser, &mut sheet, root).map_err(into_tree_error)?;
    tracing::trace!(target: "horizon_cascade_tree::parse", nodes = sheet.node_count(), "parsed stylesheet");
    Ok(sheet)
}

fn into_tree_error(err: cssparser::ParseError<'_, Error>) -> Error {
    match err.kind {
        ParseErrorKind::Custom(error) => error,
        ParseErrorKind::Basic(kind) => {
            let message = match kind {
                BasicParseErrorKind::UnexpectedToken(token) => {
                    format!("unexpected token: {token:?}")
                }
                BasicParseErrorKind::EndOfInput => "unexpected end of input".to_string(),
                other => format!("{other:?}"),
            };
            // cssparser lines are zero-based.
            Error::parse(message, err.location.line + 1, err.location.column)
        }
    }
}

/// Parse the contents of one container: rules, at-rules and declarations.
///
/// Used both for the top level and, via `parse_nested_block`, for `{ ... }`
/// blocks.
fn parse_contents<'i>(
    parser: &mut Parser<'i, '_>,
    sheet: &mut StyleSheet,
    parent: NodeId,
) -> CssResult<'i, ()> {
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            return Ok(());
        }

        let checkpoint = parser.state();
        match parser.next() {
            Ok(Token::AtKeyword(name)) => {
                let name = name.as_ref().to_string();
                parse_at_rule(parser, sheet, parent, name)?;
            }
            Ok(_) => {
                parser.reset(&checkpoint);
                parse_rule_or_declaration(parser, sheet, parent)?;
            }
            Err(_) => return Ok(()),
        }
    }
}

fn parse_at_rule<'i>(
    parser: &mut Parser<'i, '_>,
    sheet: &mut StyleSheet,
    parent: NodeId,
    name: String,
) -> CssResult<'i, ()> {
    let start = parser.position();
    parser.parse_until_before(Delimiter::Semicolon | Delimiter::CurlyBracketBlock, |p| {
        while p.next().is_ok() {}
        Ok::<_, cssparser::ParseError<'i, Error>>(())
    })?;
    let params = parser.slice_from(start).trim().to_string();

    // `parse_until_before` stops only at `;`, `{`, or end of input.
    let has_block = matches!(parser.next(), Ok(Token::CurlyBracketBlock));
    let node = sheet
        .append(parent, NodeKind::AtRule { name, params, has_block })
        .map_err(|e| parser.new_custom_error(e))?;
    if has_block {
        parser.parse_nested_block(|p| parse_contents(p, sheet, node))?;
    }
    Ok(())
}

fn parse_rule_or_declaration<'i>(
    parser: &mut Parser<'i, '_>,
    sheet: &mut StyleSheet,
    parent: NodeId,
) -> CssResult<'i, ()> {
    let location = parser.current_source_location();
    let start = parser.position();
    parser.parse_until_before(Delimiter::Semicolon | Delimiter::CurlyBracketBlock, |p| {
        while p.next().is_ok() {}
        Ok::<_, cssparser::ParseError<'i, Error>>(())
    })?;
    let raw = parser.slice_from(start);

    if matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        let selector = raw.trim().to_string();
        if selector.is_empty() {
            return Err(parser.new_custom_error(Error::parse(
                "expected selector before '{'",
                location.line + 1,
                location.column,
            )));
        }
        let rule = sheet
            .append(parent, NodeKind::Rule { selector })
            .map_err(|e| parser.new_custom_error(e))?;
        parser.parse_nested_block(|p| parse_contents(p, sheet, rule))?;
        return Ok(());
    }

    // Otherwise a `;` or the end of the enclosing block follows: this is a
    // declaration.
    let raw = raw.trim();
    if raw.is_empty() {
        // Stray semicolon.
        return Ok(());
    }
    let Some((property, value)) = raw.split_once(':') else {
        return Err(parser.new_custom_error(Error::parse(
            format!("expected ':' in declaration '{raw}'"),
            location.line + 1,
            location.column,
        )));
    };
    sheet
        .append(
            parent,
            NodeKind::Declaration {
                property: property.trim().to_string(),
                value: value.trim().to_string(),
            },
        )
        .map_err(|e| parser.new_custom_error(e))?;
    Ok(())
}
