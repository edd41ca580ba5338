//! Core traits for combining trees.

use crate::Result;

/// Recursive combination of two trees.
///
/// Two forms exist so the call site shows whether the receiver changes:
/// - [`merge_into`](Merge::merge_into) mutates the receiver in place
/// - [`merged`](Merge::merged) leaves the receiver alone and returns a new tree
///
/// Both follow the same rule: where both sides hold documents the merge
/// recurses; anywhere else the source value replaces the target value.
/// Lists are replaced wholesale, never concatenated.
///
/// # Examples
///
/// ```
/// use treekit::tree::{Doc, Merge, Value};
///
/// let mut target = Doc::new().with("a", Doc::new().with("x", 1));
/// let source = Doc::new().with("a", Doc::new().with("y", 2));
///
/// let preview = target.merged(&source)?;
/// assert_eq!(target.get_path("a.y"), None);
///
/// target.merge_into(&source)?;
/// assert_eq!(target, preview);
/// assert_eq!(target.get_path("a.x"), Some(Value::Int(1)));
/// # Ok::<(), treekit::Error>(())
/// ```
pub trait Merge: Sized {
    /// Merges `source` into `self` in place.
    ///
    /// Values copied over from `source` are deep copies: after the call
    /// `self` shares no storage with `source`.
    ///
    /// # Errors
    ///
    /// A cycle in either side fails the call before anything is modified.
    fn merge_into(&mut self, source: &Self) -> Result<()>;

    /// Returns a deep copy of `self` with `source` merged into it.
    fn merged(&self, source: &Self) -> Result<Self>;
}
