//! Arena-backed mutable stylesheet tree.
//!
//! Uses arena-based storage via `SlotMap` for stable node ids and efficient
//! parent-child relationship management. Ids stay valid while siblings are
//! inserted and removed around a node; they become invalid once the node
//! itself is removed.

use std::path::Path;

use slotmap::{SlotMap, new_key_type};

use crate::path::NodePath;
use crate::{Error, Result};

new_key_type! {
    /// A stable identifier for a node in a [`StyleSheet`].
    pub struct NodeId;
}

/// The payload of a single tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The stylesheet root. Exactly one per tree.
    Root,
    /// A styled rule (`.selector { ... }`).
    Rule {
        /// Raw selector text.
        selector: String,
    },
    /// An at-rule (`@name params`), with or without a block.
    AtRule {
        /// Name without the leading `@`.
        name: String,
        /// Raw prelude text after the name, trimmed.
        params: String,
        /// Whether the rule carries a `{ ... }` block.
        has_block: bool,
    },
    /// A `property: value` declaration.
    Declaration {
        /// Property name.
        property: String,
        /// Raw value text, exactly as written in the source.
        value: String,
    },
}

impl NodeKind {
    /// Whether nodes of this kind may contain children.
    pub fn is_container(&self) -> bool {
        match self {
            NodeKind::Root | NodeKind::Rule { .. } => true,
            NodeKind::AtRule { has_block, .. } => *has_block,
            NodeKind::Declaration { .. } => false,
        }
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A stylesheet held as a mutable tree of nodes.
///
/// The tree owns all nodes; navigation and mutation go through [`NodeId`]
/// handles. Operations on an id whose node has been removed return
/// [`Error::StaleNode`].
///
/// # Example
///
/// ```
/// use horizon_cascade_tree::StyleSheet;
///
/// let sheet = StyleSheet::parse(".button { color: red; }")?;
/// let rule = sheet.children(sheet.root())?[0];
/// assert_eq!(sheet.children(rule)?.len(), 1);
/// # Ok::<(), horizon_cascade_tree::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StyleSheet {
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
}

impl StyleSheet {
    /// Create an empty stylesheet containing only the root node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData {
            kind: NodeKind::Root,
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, root }
    }

    /// Parse a stylesheet from CSS text.
    pub fn parse(css: &str) -> Result<Self> {
        crate::parse::parse_stylesheet(css)
    }

    /// Load a stylesheet from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content)
    }

    /// Serialize the tree back to CSS text.
    pub fn to_css(&self) -> String {
        crate::serialize::to_css(self)
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Check if a node exists in the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Total number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn data(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes.get(id).ok_or(Error::StaleNode)
    }

    fn data_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes.get_mut(id).ok_or(Error::StaleNode)
    }

    /// Get a node's payload.
    pub fn kind(&self, id: NodeId) -> Result<&NodeKind> {
        self.data(id).map(|d| &d.kind)
    }

    /// Get a node's payload mutably.
    pub fn kind_mut(&mut self, id: NodeId) -> Result<&mut NodeKind> {
        self.data_mut(id).map(|d| &mut d.kind)
    }

    /// Get the parent of a node. The root has no parent.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.data(id).map(|d| d.parent)
    }

    /// Get the children of a node, in document order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        self.data(id).map(|d| d.children.as_slice())
    }

    /// Position of `child` within `parent`'s children.
    pub fn child_index(&self, parent: NodeId, child: NodeId) -> Result<Option<usize>> {
        Ok(self.data(parent)?.children.iter().position(|&c| c == child))
    }

    /// The child of `parent` at `index`, if any.
    pub fn child_at(&self, parent: NodeId, index: usize) -> Result<Option<NodeId>> {
        Ok(self.data(parent)?.children.get(index).copied())
    }

    fn ensure_container(&self, id: NodeId) -> Result<()> {
        if self.data(id)?.kind.is_container() {
            Ok(())
        } else {
            Err(Error::NotAContainer)
        }
    }

    fn new_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        self.nodes.insert(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        })
    }

    /// Append a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId> {
        self.ensure_container(parent)?;
        let id = self.new_node(parent, kind);
        if let Some(data) = self.nodes.get_mut(parent) {
            data.children.push(id);
        }
        Ok(id)
    }

    /// Insert a new node as the first child of `parent`.
    pub fn prepend(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId> {
        self.ensure_container(parent)?;
        let id = self.new_node(parent, kind);
        if let Some(data) = self.nodes.get_mut(parent) {
            data.children.insert(0, id);
        }
        Ok(id)
    }

    /// Insert a new node as the next sibling of `anchor`.
    pub fn insert_after(&mut self, anchor: NodeId, kind: NodeKind) -> Result<NodeId> {
        let parent = self.parent(anchor)?.ok_or(Error::NoParent)?;
        let index = self
            .child_index(parent, anchor)?
            .ok_or(Error::StaleNode)?;
        let id = self.new_node(parent, kind);
        if let Some(data) = self.nodes.get_mut(parent) {
            data.children.insert(index + 1, id);
        }
        tracing::trace!(target: "horizon_cascade_tree::node", ?anchor, ?id, "inserted sibling");
        Ok(id)
    }

    /// Deep-clone a node's subtree and insert the clone as its next sibling.
    pub fn clone_after(&mut self, node: NodeId) -> Result<NodeId> {
        let parent = self.parent(node)?.ok_or(Error::NoParent)?;
        let index = self.child_index(parent, node)?.ok_or(Error::StaleNode)?;
        let clone = self.clone_subtree(node, parent)?;
        if let Some(data) = self.nodes.get_mut(parent) {
            data.children.insert(index + 1, clone);
        }
        Ok(clone)
    }

    fn clone_subtree(&mut self, node: NodeId, parent: NodeId) -> Result<NodeId> {
        let (kind, children) = {
            let data = self.data(node)?;
            (data.kind.clone(), data.children.clone())
        };
        let id = self.new_node(parent, kind);
        for child in children {
            let child_clone = self.clone_subtree(child, id)?;
            if let Some(data) = self.nodes.get_mut(id) {
                data.children.push(child_clone);
            }
        }
        Ok(id)
    }

    /// Remove a node and its whole subtree from the tree.
    ///
    /// The root cannot be removed. All ids into the removed subtree become
    /// stale.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(Error::NoParent);
        }
        let parent = self.parent(id)?;

        let mut subtree = Vec::new();
        self.collect_subtree(id, &mut subtree);
        tracing::trace!(target: "horizon_cascade_tree::node", ?id, node_count = subtree.len(), "removing subtree");

        if let Some(parent_id) = parent
            && let Some(parent_data) = self.nodes.get_mut(parent_id)
        {
            parent_data.children.retain(|&child| child != id);
        }
        for node in subtree {
            self.nodes.remove(node);
        }
        Ok(())
    }

    fn collect_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        let Some(data) = self.nodes.get(id) else { return };
        for &child in &data.children {
            self.collect_subtree(child, out);
        }
    }

    /// All declaration nodes in document order.
    ///
    /// Returns a snapshot: the tree can be freely mutated while iterating
    /// the returned ids.
    pub fn declarations(&self) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.walk(self.root, &mut |sheet, id| {
            if matches!(sheet.nodes[id].kind, NodeKind::Declaration { .. }) {
                result.push(id);
            }
        });
        result
    }

    /// All at-rule nodes with the given name (ASCII case-insensitive), in
    /// document order. Returns a snapshot, like [`StyleSheet::declarations`].
    pub fn at_rules(&self, name: &str) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.walk(self.root, &mut |sheet, id| {
            if let NodeKind::AtRule { name: rule_name, .. } = &sheet.nodes[id].kind
                && rule_name.eq_ignore_ascii_case(name)
            {
                result.push(id);
            }
        });
        result
    }

    fn walk(&self, id: NodeId, visit: &mut impl FnMut(&Self, NodeId)) {
        let Some(data) = self.nodes.get(id) else { return };
        for &child in &data.children {
            visit(self, child);
            self.walk(child, visit);
        }
    }

    /// Property name and raw value of a declaration node.
    pub fn declaration(&self, id: NodeId) -> Result<(&str, &str)> {
        match &self.data(id)?.kind {
            NodeKind::Declaration { property, value } => Ok((property, value)),
            _ => Err(Error::NotADeclaration),
        }
    }

    /// Overwrite the raw value of a declaration node.
    pub fn set_declaration_value(&mut self, id: NodeId, value: impl Into<String>) -> Result<()> {
        match &mut self.data_mut(id)?.kind {
            NodeKind::Declaration { value: slot, .. } => {
                *slot = value.into();
                Ok(())
            }
            _ => Err(Error::NotADeclaration),
        }
    }

    /// Compute the root-to-leaf child-index path of a node.
    ///
    /// The path stays valid only until the tree is mutated.
    pub fn path_of(&self, id: NodeId) -> Result<NodePath> {
        let mut indices = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current)? {
            let index = self
                .child_index(parent, current)?
                .ok_or(Error::StaleNode)?;
            indices.push(index);
            current = parent;
        }
        indices.reverse();
        Ok(NodePath::new(indices))
    }

    /// Resolve a child-index path under the current tree shape.
    pub fn node_at_path(&self, path: &NodePath) -> Option<NodeId> {
        let mut current = self.root;
        for &index in path.as_slice() {
            current = *self.nodes.get(current)?.children.get(index)?;
        }
        Some(current)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}
