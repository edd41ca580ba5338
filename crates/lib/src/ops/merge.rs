//! Deep merge.
//!
//! The merge rule, applied key by key over the source's entries:
//! where both sides hold a document, recurse; otherwise the source value
//! overwrites the target value. Lists are replaced wholesale.
//!
//! [`merge_into`] mutates its first argument. Callers that need the
//! original untouched use [`merged`], which works on a deep copy.

use tracing::trace;

use crate::{
    Result,
    tree::{Doc, Merge, Value, ensure_acyclic},
};

/// Merges `source` into `target` in place.
///
/// Keys only in `target` are kept, keys only in `source` are added, and
/// shared keys follow the merge rule. Values taken from `source` are deep
/// copies, so `target` never aliases `source` afterwards.
///
/// # Errors
///
/// [`TreeError::Cycle`](crate::tree::TreeError::Cycle) if either side
/// contains itself. Both sides are checked before `target` is touched.
///
/// ```
/// use serde_json::json;
/// use treekit::{ops::merge_into, tree::{Doc, Value}};
///
/// let mut target = Doc::try_from(json!({"a": {"x": 1}, "list": [1, 2]}))?;
/// let source = Doc::try_from(json!({"a": {"y": 2}, "list": [3]}))?;
/// merge_into(&mut target, &source)?;
///
/// assert_eq!(
///     Value::from(target),
///     Value::from(json!({"a": {"x": 1, "y": 2}, "list": [3]}))
/// );
/// # Ok::<(), treekit::Error>(())
/// ```
pub fn merge_into(target: &mut Doc, source: &Doc) -> Result<()> {
    ensure_acyclic(&Value::Doc(target.clone()))?;
    ensure_acyclic(&Value::Doc(source.clone()))?;
    merge_docs(target, source)?;
    trace!(fields = source.len(), "Merged document");
    Ok(())
}

/// Returns a deep copy of `target` with `source` merged into it.
///
/// Neither argument is modified.
pub fn merged(target: &Doc, source: &Doc) -> Result<Doc> {
    let mut copy = target.deep_clone()?;
    merge_into(&mut copy, source)?;
    Ok(copy)
}

/// Combines the top-level fields of `a` and `b` into a new document.
///
/// Fields of `b` win. Nested values are not merged; the result shares
/// them with the inputs.
///
/// ```
/// use serde_json::json;
/// use treekit::{ops::shallow_merge, tree::{Doc, Value}};
///
/// let a = Doc::try_from(json!({"id": 1, "meta": {"x": 1}}))?;
/// let b = Doc::try_from(json!({"meta": {"y": 2}}))?;
/// let combined = shallow_merge(&a, &b);
/// assert_eq!(combined.get_path("meta.x"), None);
/// assert_eq!(combined.get("id"), Some(Value::Int(1)));
/// # Ok::<(), treekit::Error>(())
/// ```
pub fn shallow_merge(a: &Doc, b: &Doc) -> Doc {
    let mut out: Doc = a.entries().into_iter().collect();
    out.extend(b.entries());
    out
}

// Both sides are known to be acyclic. The source entries are snapshotted
// so that a source sharing nodes with the target is never borrowed while
// the target is written.
fn merge_docs(target: &mut Doc, source: &Doc) -> Result<()> {
    for (key, incoming) in source.entries() {
        match (target.get(&key), &incoming) {
            (Some(Value::Doc(mut existing)), Value::Doc(nested)) => {
                merge_docs(&mut existing, nested)?;
            }
            _ => {
                target.insert(key, incoming.deep_clone()?);
            }
        }
    }
    Ok(())
}

impl Merge for Doc {
    fn merge_into(&mut self, source: &Self) -> Result<()> {
        merge_into(self, source)
    }

    fn merged(&self, source: &Self) -> Result<Self> {
        merged(self, source)
    }
}

impl Merge for Value {
    /// Documents merge recursively; any other pairing replaces `self` with
    /// a copy of `source`.
    fn merge_into(&mut self, source: &Self) -> Result<()> {
        match (self, source) {
            (Value::Doc(target), Value::Doc(source)) => merge_into(target, source),
            (target, source) => {
                *target = source.deep_clone()?;
                Ok(())
            }
        }
    }

    fn merged(&self, source: &Self) -> Result<Self> {
        match (self, source) {
            (Value::Doc(target), Value::Doc(source)) => Ok(Value::Doc(merged(target, source)?)),
            (_, source) => source.deep_clone(),
        }
    }
}
