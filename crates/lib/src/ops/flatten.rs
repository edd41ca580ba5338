//! Flattening nested documents into single-level documents and back.
//!
//! A flattened document holds one entry per leaf of the original, keyed by
//! the chain of keys leading to it joined with a separator:
//!
//! ```
//! use serde_json::json;
//! use treekit::{ops::{flatten, unflatten}, tree::{Doc, Value}};
//!
//! let nested = Doc::try_from(json!({"a": {"b": 1, "c": {"d": 2}}}))?;
//! let flat = flatten(&nested)?;
//! assert_eq!(Value::from(flat.clone()), Value::from(json!({"a.b": 1, "a.c.d": 2})));
//!
//! assert_eq!(unflatten(&flat)?, nested);
//! # Ok::<(), treekit::Error>(())
//! ```
//!
//! Lists are leaves: they are copied whole and never indexed into.

use tracing::trace;

use crate::{
    Result,
    tree::{
        Doc, TreeError, Value,
        guard::{Ancestry, Step},
        path::SEPARATOR,
    },
};

/// What to do with a nested document that has no entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyDocs {
    /// Emit nothing; the key chain disappears from the output.
    #[default]
    Drop,
    /// Emit the key chain mapped to an empty document.
    Keep,
}

/// Settings for [`flatten_with`] and [`unflatten_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Joins key chains. Must not be empty for [`unflatten_with`].
    pub separator: String,
    pub empty_docs: EmptyDocs,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            separator: SEPARATOR.to_string(),
            empty_docs: EmptyDocs::default(),
        }
    }
}

impl FlattenOptions {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn empty_docs(mut self, empty_docs: EmptyDocs) -> Self {
        self.empty_docs = empty_docs;
        self
    }
}

/// Flattens `doc` with `.` as separator, dropping empty nested documents.
///
/// # Errors
///
/// [`TreeError::Cycle`] if `doc` contains itself.
pub fn flatten(doc: &Doc) -> Result<Doc> {
    flatten_with(doc, &FlattenOptions::default())
}

/// Flattens `doc` with explicit options.
///
/// Keys that already contain the separator are joined as-is, so such keys
/// do not survive a round trip through [`unflatten_with`].
pub fn flatten_with(doc: &Doc, options: &FlattenOptions) -> Result<Doc> {
    let mut out = Doc::new();
    let mut ancestry = Ancestry::new();
    collect(doc, None, options, &mut ancestry, &mut out)?;
    trace!(leaves = out.len(), "Flattened document");
    Ok(out)
}

fn collect(
    doc: &Doc,
    prefix: Option<&str>,
    options: &FlattenOptions,
    ancestry: &mut Ancestry,
    out: &mut Doc,
) -> std::result::Result<(), TreeError> {
    let node = Value::Doc(doc.clone());
    ancestry.enter(&node)?;

    for (key, value) in doc.entries() {
        let chain = match prefix {
            None => key.clone(),
            Some(prefix) => format!("{prefix}{}{key}", options.separator),
        };
        ancestry.push(Step::Key(key));

        match value {
            Value::Doc(nested) if nested.is_empty() => {
                if options.empty_docs == EmptyDocs::Keep {
                    out.insert(chain, Doc::new());
                }
            }
            Value::Doc(nested) => collect(&nested, Some(&chain), options, ancestry, out)?,
            Value::List(list) => {
                // Copied under the same ancestry so a list pointing back up is caught.
                let copy = crate::ops::clone::copy_list(&list, ancestry)?;
                out.insert(chain, copy);
            }
            leaf => {
                out.insert(chain, leaf);
            }
        }

        ancestry.pop();
    }

    ancestry.leave(&node);
    Ok(())
}

/// Rebuilds nested documents from a flattened one, splitting keys on `.`.
///
/// Keys are split as [`Path`](crate::tree::Path) splits them: empty pieces
/// are empty keys, so `"a..b"` lands under `a` then `""` then `b`.
/// Intermediate documents are created as [`Doc::set_path`] would. When a
/// key both holds a value and prefixes a longer key, the later entry wins.
///
/// # Errors
///
/// [`TreeError::InvalidPath`] for the empty key `""`,
/// and [`TreeError::Cycle`] if a value contains itself.
pub fn unflatten(flat: &Doc) -> Result<Doc> {
    unflatten_with(flat, &FlattenOptions::default())
}

/// Rebuilds nested documents with an explicit separator.
///
/// [`FlattenOptions::empty_docs`] has no effect here.
pub fn unflatten_with(flat: &Doc, options: &FlattenOptions) -> Result<Doc> {
    if options.separator.is_empty() {
        return Err(TreeError::InvalidArgument {
            reason: "separator must not be empty".to_string(),
        }
        .into());
    }

    let mut out = Doc::new();
    for (key, value) in flat.entries() {
        if key.is_empty() {
            return Err(TreeError::InvalidPath {
                path: format!("'{key}' (flattened key has no components)"),
            }
            .into());
        }
        let segments: Vec<&str> = key.split(options.separator.as_str()).collect();
        out.set_segments(&segments, value.deep_clone()?);
    }
    trace!(entries = flat.len(), "Unflattened document");
    Ok(out)
}
