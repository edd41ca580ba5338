//! Error types for tree operations.
//!
//! This module defines the structured errors raised by the tree model and
//! the operations built on it. Two kinds of failure exist: validation
//! failures (malformed input such as an empty path) and cycle failures (a
//! value that reaches itself through its own descendants).
//!
//! Shape mismatches inside equality and merge are *not* errors: equality
//! answers `false` and merge overwrites.

use thiserror::Error;

/// Structured error types for tree operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A path with no components was used where a location is required
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// A field-name key selector found a value that cannot act as a key
    #[error("Invalid key in field '{field}': expected a primitive, found {found}")]
    InvalidKey { field: String, found: &'static str },

    /// An argument was outside the range an operation accepts
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Two distinct record keys render to the same mapping key
    #[error("Key collision: more than one record key renders as '{label}'")]
    KeyCollision { label: String },

    /// A value had a different shape than the conversion required
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A reference reappeared along its own descent chain
    #[error("Cycle detected at {path}")]
    Cycle { path: String },
}

impl TreeError {
    /// Check if this error is a validation failure
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            TreeError::InvalidPath { .. }
                | TreeError::InvalidKey { .. }
                | TreeError::InvalidArgument { .. }
                | TreeError::KeyCollision { .. }
        )
    }

    /// Check if this error reports a cyclic input
    pub fn is_cycle_error(&self) -> bool {
        matches!(self, TreeError::Cycle { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, TreeError::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::InvalidPath { path } | TreeError::Cycle { path } => Some(path),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
