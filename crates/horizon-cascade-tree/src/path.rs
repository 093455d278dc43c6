//! Tree-position addressing.

use std::fmt;

/// A root-to-leaf sequence of child indices identifying a node.
///
/// The root itself is excluded; the first index selects a child of the
/// root, the last selects the target node within its parent. Two equal
/// paths denote the same node only for a single unmutated tree snapshot —
/// inserting or removing siblings invalidates paths computed before the
/// edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Create a path from root-to-leaf child indices.
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The child indices, root to leaf.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of indices in the path (the node's depth).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path addresses the root itself.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}
