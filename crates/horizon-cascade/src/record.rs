//! Path-indexed recording of pending tree edits.

use std::collections::BTreeMap;

use horizon_cascade_tree::NodePath;

/// Records one payload per tree position and drains them in an order that
/// keeps undrained positions valid while the tree is edited.
///
/// Positions are child-index paths captured before any mutation. Draining
/// visits child indices from largest to smallest at every trie level,
/// emitting a node's own payload before descending into its children.
/// Later siblings and everything beneath them drain before earlier
/// siblings, so removing, replacing or inserting around a drained position
/// never shifts a position that has not been drained yet.
///
/// The map is built during one scanning pass, then consumed whole by
/// [`PathMap::into_descending_entries`]; it is not meant to be long-lived.
#[derive(Debug)]
pub struct PathMap<T> {
    children: BTreeMap<usize, TrieNode<T>>,
}

#[derive(Debug)]
struct TrieNode<T> {
    value: Option<T>,
    children: BTreeMap<usize, TrieNode<T>>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
        }
    }
}

impl<T> PathMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Record a payload at `path`, overwriting any previous payload there.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty; the root itself is not a recordable
    /// position.
    pub fn record(&mut self, path: &NodePath, payload: T) {
        let indices = path.as_slice();
        assert!(!indices.is_empty(), "a recorded path needs at least one index");

        let mut node = self.children.entry(indices[0]).or_default();
        for &index in &indices[1..] {
            node = node.children.entry(index).or_default();
        }
        node.value = Some(payload);
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of recorded payloads.
    pub fn len(&self) -> usize {
        fn count<T>(children: &BTreeMap<usize, TrieNode<T>>) -> usize {
            children
                .values()
                .map(|node| usize::from(node.value.is_some()) + count(&node.children))
                .sum()
        }
        count(&self.children)
    }

    /// Consume the map, yielding `(path, payload)` pairs in descending
    /// drain order.
    pub fn into_descending_entries(self) -> Vec<(NodePath, T)> {
        let mut entries = Vec::new();
        let mut prefix = Vec::new();
        drain(self.children, &mut prefix, &mut entries);
        entries
    }
}

impl<T> Default for PathMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn drain<T>(
    children: BTreeMap<usize, TrieNode<T>>,
    prefix: &mut Vec<usize>,
    out: &mut Vec<(NodePath, T)>,
) {
    for (index, node) in children.into_iter().rev() {
        prefix.push(index);
        if let Some(payload) = node.value {
            out.push((NodePath::new(prefix.clone()), payload));
        }
        drain(node.children, prefix, out);
        prefix.pop();
    }
}
