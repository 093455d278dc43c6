//! Declaration scanning and stylesheet rewriting.
//!
//! One pass reads every declaration and records pending rewrites against
//! the declaration's tree path; a second pass drains the recordings in
//! descending path order and performs the tree surgery. Recording first
//! keeps the scan free of index invalidation; the drain order keeps every
//! not-yet-applied path valid while nodes are cloned, inserted and
//! removed.

use std::collections::HashMap;

use horizon_cascade_tree::{NodeId, NodeKind, StyleSheet};

use crate::error::{Error, Result};
use crate::expand::{ConditionKey, ResolvedValues, expand};
use crate::parser::parse_property;
use crate::record::PathMap;
use crate::template::PropertyTemplate;

/// A pending rewrite for one declaration.
#[derive(Debug)]
struct Update {
    property: String,
    resolved: ResolvedValues,
}

/// Media containers already created next to one originating rule.
#[derive(Default)]
struct RuleAnchors {
    /// The most recently created `@media` block for the rule; the next
    /// block is inserted after it so blocks read in first-declared order
    /// rather than reverse.
    last_inserted: Option<NodeId>,
    /// Inner rule per media query, for grouping several declarations under
    /// the same block.
    by_query: HashMap<String, NodeId>,
}

/// Expand every responsive value in the stylesheet.
///
/// Each declaration whose value uses `media-value(...)` is replaced: the
/// `else` branch becomes a plain declaration in place, and every media
/// branch becomes a declaration inside an `@media <query> { <selector> }`
/// block inserted after the declaration's rule. Declarations of the same
/// rule that share a query land in the same block.
///
/// Any syntax, validation or exhaustiveness failure aborts the whole run
/// with the offending declaration's property attached; the tree is left in
/// an unspecified partially-scanned state only on error.
///
/// # Example
///
/// ```
/// use horizon_cascade::expand_stylesheet;
/// use horizon_cascade_tree::StyleSheet;
///
/// let mut sheet = StyleSheet::parse(
///     r#".root { padding: media-value(case: "(max-width: 599px)" as: "25px", else: "50px"); }"#,
/// )?;
/// expand_stylesheet(&mut sheet)?;
///
/// let css = sheet.to_css();
/// assert!(css.contains("padding: 50px;"));
/// assert!(css.contains("@media (max-width: 599px)"));
/// # Ok::<(), horizon_cascade::Error>(())
/// ```
pub fn expand_stylesheet(sheet: &mut StyleSheet) -> Result<()> {
    let mut updates = PathMap::new();

    for declaration in sheet.declarations() {
        read_declaration(sheet, declaration, &mut updates)?;
    }

    tracing::debug!(
        target: "horizon_cascade::transform",
        updates = updates.len(),
        "replaying recorded expansions"
    );
    apply_updates(sheet, updates)
}

/// Parse one declaration and record its expansion, if any.
fn read_declaration(
    sheet: &StyleSheet,
    declaration: NodeId,
    updates: &mut PathMap<Update>,
) -> Result<()> {
    let (property, value) = sheet.declaration(declaration)?;

    let template = parse_property(value).map_err(|e| e.in_declaration(property))?;
    let PropertyTemplate::Responsive(segments) = template else {
        return Ok(());
    };

    let resolved = expand(&segments).map_err(|e| e.in_declaration(property))?;
    let path = sheet.path_of(declaration)?;
    tracing::trace!(
        target: "horizon_cascade::transform",
        %path,
        property,
        conditions = resolved.len(),
        "recorded responsive declaration"
    );
    updates.record(&path, Update {
        property: property.to_string(),
        resolved,
    });
    Ok(())
}

/// Replay recorded expansions against the tree.
fn apply_updates(sheet: &mut StyleSheet, updates: PathMap<Update>) -> Result<()> {
    let mut anchors: HashMap<NodeId, RuleAnchors> = HashMap::new();

    for (path, update) in updates.into_descending_entries() {
        let declaration = sheet
            .node_at_path(&path)
            .ok_or(horizon_cascade_tree::Error::StaleNode)?;
        let rule = sheet
            .parent(declaration)?
            .ok_or(horizon_cascade_tree::Error::StaleNode)?;

        for (key, value) in &update.resolved {
            match key {
                ConditionKey::Default => {
                    let clone = sheet.clone_after(declaration)?;
                    sheet.set_declaration_value(clone, value.clone())?;
                }
                ConditionKey::Media(query) => {
                    let container = media_container(sheet, rule, query, &mut anchors)
                        .map_err(|e| e.in_declaration(&update.property))?;
                    // Entries drain in reverse source order; prepending
                    // restores it.
                    sheet.prepend(container, NodeKind::Declaration {
                        property: update.property.clone(),
                        value: value.clone(),
                    })?;
                }
            }
        }

        sheet.remove(declaration)?;
    }
    Ok(())
}

/// The inner rule of the `@media` block for `query`, created on first use.
fn media_container(
    sheet: &mut StyleSheet,
    rule: NodeId,
    query: &str,
    anchors: &mut HashMap<NodeId, RuleAnchors>,
) -> Result<NodeId> {
    let entry = anchors.entry(rule).or_default();
    if let Some(&container) = entry.by_query.get(query) {
        return Ok(container);
    }

    let selector = match sheet.kind(rule)? {
        NodeKind::Rule { selector } => selector.clone(),
        _ => return Err(Error::validation("responsive value outside a styled rule")),
    };

    let anchor = entry.last_inserted.unwrap_or(rule);
    let media = sheet.insert_after(anchor, NodeKind::AtRule {
        name: "media".to_string(),
        params: query.to_string(),
        has_block: true,
    })?;
    let container = sheet.append(media, NodeKind::Rule { selector })?;
    tracing::trace!(
        target: "horizon_cascade::transform",
        query,
        ?rule,
        "created media block"
    );

    entry.last_inserted = Some(media);
    entry.by_query.insert(query.to_string(), container);
    Ok(container)
}
