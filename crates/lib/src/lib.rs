//!
//! Treekit: recursive operations on nested trees of mappings and sequences.
//!
//! ## Core Concepts
//!
//! * **Values (`tree::Value`)**: A tree is a primitive (null, bool, number, text), a
//!   sequence (`tree::List`) or a string-keyed mapping (`tree::Doc`).
//! * **Shared handles**: `Doc` and `List` are reference-counted. Cloning a handle aliases the
//!   same storage, which is also how a tree can end up containing itself.
//! * **Paths (`tree::Path`)**: Dotted locations such as `user.address.city`, used by
//!   `Doc::get_path` and `Doc::set_path`.
//! * **Operations (`ops`)**: Structural equality, deep clone, deep merge, flattening and
//!   keyed reconciliation of record sequences. Each one detects cycles and fails with a
//!   `TreeError::Cycle` instead of recursing forever.

pub mod ops;
pub mod tree;

pub use ops::{deep_clone, equals, flatten, merge_into, unflatten};
pub use tree::{Doc, List, Merge, Path, PathBuf, TreeError, Value};

/// Result type used throughout the Treekit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Treekit library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the tree model and the operations on it
    #[error(transparent)]
    Tree(tree::TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error reports malformed input, such as an empty path.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error reports a value that contains itself.
    pub fn is_cycle_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_cycle_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from JSON parsing or rendering.
    pub fn is_serialize_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
