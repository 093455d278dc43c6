//! Mutable CSS syntax tree for Horizon Cascade.
//!
//! This crate holds a parsed stylesheet as a tree of nodes that can be
//! freely rearranged before being serialized back to CSS text:
//!
//! - **Arena storage**: stable [`NodeId`] handles via slotmap-backed nodes
//! - **Raw-slice fidelity**: selectors, at-rule params and declaration
//!   values keep their exact source text
//! - **Mutation primitives**: append, prepend, insert-after, deep clone,
//!   cascade remove
//! - **Path addressing**: root-to-leaf child-index paths for recording
//!   positions across a scan/mutate cycle
//!
//! # Example
//!
//! ```
//! use horizon_cascade_tree::{NodeKind, StyleSheet};
//!
//! let mut sheet = StyleSheet::parse(".button { color: red; }")?;
//! let rule = sheet.children(sheet.root())?[0];
//! sheet.append(rule, NodeKind::Declaration {
//!     property: "margin".into(),
//!     value: "0".into(),
//! })?;
//! assert!(sheet.to_css().contains("margin: 0;"));
//! # Ok::<(), horizon_cascade_tree::Error>(())
//! ```

mod error;
mod node;
mod parse;
mod path;
mod serialize;

pub use error::{Error, Result};
pub use node::{NodeId, NodeKind, StyleSheet};
pub use path::NodePath;
