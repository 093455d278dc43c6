//! Serialization of a [`StyleSheet`] tree back to CSS text.
//!
//! The output is deterministic: two-space indentation per nesting level,
//! one declaration per line, and a blank line between top-level nodes.

use crate::node::{NodeId, NodeKind, StyleSheet};

pub(crate) fn to_css(sheet: &StyleSheet) -> String {
    let mut out = String::new();
    let Ok(children) = sheet.children(sheet.root()) else {
        return out;
    };
    for (i, &child) in children.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_node(sheet, child, 0, &mut out);
    }
    out
}

fn write_node(sheet: &StyleSheet, id: NodeId, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let Ok(kind) = sheet.kind(id) else { return };
    match kind {
        NodeKind::Root => {}
        NodeKind::Declaration { property, value } => {
            out.push_str(&indent);
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        NodeKind::Rule { selector } => {
            write_block(sheet, id, &indent, selector, depth, out);
        }
        NodeKind::AtRule { name, params, has_block } => {
            let header = if params.is_empty() {
                format!("@{name}")
            } else {
                format!("@{name} {params}")
            };
            if *has_block {
                write_block(sheet, id, &indent, &header, depth, out);
            } else {
                out.push_str(&indent);
                out.push_str(&header);
                out.push_str(";\n");
            }
        }
    }
}

fn write_block(
    sheet: &StyleSheet,
    id: NodeId,
    indent: &str,
    header: &str,
    depth: usize,
    out: &mut String,
) {
    let children = sheet.children(id).unwrap_or(&[]);
    out.push_str(indent);
    out.push_str(header);
    if children.is_empty() {
        out.push_str(" {}\n");
        return;
    }
    out.push_str(" {\n");
    for &child in children {
        write_node(sheet, child, depth + 1, out);
    }
    out.push_str(indent);
    out.push_str("}\n");
}
