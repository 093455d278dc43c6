//! Whitespace preparation for CSS-modules `@value` at-rules.
//!
//! CSS-modules tooling reads `@value` params line by line and chokes on
//! multi-line `media-value(...)` calls. This pass folds each `@value`
//! prelude onto a single line before that tooling runs; it knows nothing
//! about the call grammar itself.

use horizon_cascade_tree::{NodeKind, StyleSheet};

/// Rewrite the params of every blockless `@value` at-rule onto one line.
pub fn prepare_value_at_rules(sheet: &mut StyleSheet) {
    for node in sheet.at_rules("value") {
        let Ok(NodeKind::AtRule { params, has_block: false, .. }) = sheet.kind_mut(node) else {
            continue;
        };
        let folded = fold_params(params);
        *params = folded;
    }
}

/// Keep everything up to the first colon; after it, drop newlines and
/// collapse any whitespace run that follows a space into that space.
fn fold_params(input: &str) -> String {
    let keep = input.find(':').map_or(0, |i| i + 1);
    let mut result = String::from(&input[..keep]);
    let mut dropping_space = false;

    for ch in input[keep..].chars() {
        if dropping_space {
            if ch.is_whitespace() {
                continue;
            }
            dropping_space = false;
            result.push(ch);
            continue;
        }
        match ch {
            ' ' => {
                result.push(ch);
                dropping_space = true;
            }
            '\n' => {}
            _ => result.push(ch),
        }
    }
    result
}
