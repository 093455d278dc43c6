//! Error types for responsive value expansion.

use crate::expand::ConditionKey;

/// Result type alias for expansion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while expanding responsive values.
///
/// All variants are local to a single declaration's property value; the
/// driver attaches the owning declaration via
/// [`Error::in_declaration`] and treats the failure as fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed call syntax inside a property value.
    #[error("syntax error: {message}")]
    Syntax { message: String },

    /// A structurally valid call with inconsistent clauses.
    #[error("invalid responsive value: {message}")]
    Validation { message: String },

    /// A condition key used in the property resolves no value for one of
    /// its calls.
    #[error("non-exhaustive responsive value for condition \"{key}\"")]
    NonExhaustive { key: ConditionKey },

    /// An error attributed to a specific declaration.
    #[error("in declaration '{property}': {source}")]
    InDeclaration {
        property: String,
        #[source]
        source: Box<Error>,
    },

    /// Error from the underlying stylesheet tree.
    #[error(transparent)]
    Tree(#[from] horizon_cascade_tree::Error),
}

impl Error {
    /// Create a syntax error.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an exhaustiveness error for a condition key.
    pub fn non_exhaustive(key: ConditionKey) -> Self {
        Self::NonExhaustive { key }
    }

    /// Attach the owning declaration's property name.
    pub fn in_declaration(self, property: impl Into<String>) -> Self {
        Self::InDeclaration {
            property: property.into(),
            source: Box::new(self),
        }
    }
}
