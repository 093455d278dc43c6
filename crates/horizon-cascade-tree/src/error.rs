//! Error types for the stylesheet tree.

use std::path::PathBuf;

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or editing a stylesheet tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSS parsing error.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The node id is invalid or the node has been removed.
    #[error("Node is no longer part of the tree")]
    StaleNode,

    /// The operation needs a container node but was given a leaf.
    #[error("Node cannot contain children")]
    NotAContainer,

    /// The operation needs a sibling position but was given the root.
    #[error("The root node has no parent")]
    NoParent,

    /// The operation expects a declaration node.
    #[error("Node is not a declaration")]
    NotADeclaration,
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
