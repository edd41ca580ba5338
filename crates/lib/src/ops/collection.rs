//! Sequence and document helpers built on structural equality.
//!
//! Every membership test here compares with [`equals`], so `1` and `1.0`
//! are the same element and two documents with the same fields are the
//! same element regardless of identity. Results keep first-occurrence
//! order and share elements with the inputs.
//!
//! All functions fail with [`TreeError::Cycle`] if a compared element
//! contains itself.

use crate::{
    Result,
    ops::equals,
    tree::{Doc, TreeError, Value},
};

/// Whether `items` holds an element structurally equal to `needle`.
pub fn contains(items: &[Value], needle: &Value) -> Result<bool> {
    for item in items {
        if equals(item, needle)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The distinct elements of `items`, first occurrence kept.
///
/// Quadratic in the number of elements, as elements are only comparable,
/// not hashable.
pub fn unique(items: &[Value]) -> Result<Vec<Value>> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !contains(&out, item)? {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// The distinct elements of `a` followed by those of `b` not already
/// present.
pub fn union(a: &[Value], b: &[Value]) -> Result<Vec<Value>> {
    let mut out = unique(a)?;
    for item in b {
        if !contains(&out, item)? {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// The elements of `a` that do not occur in `b`. Duplicates within `a`
/// are kept.
///
/// ```
/// use treekit::{ops::difference, tree::Value};
///
/// let a = [Value::from(1), Value::from(2), Value::from(2), Value::from(3)];
/// let b = [Value::from(2.0)];
/// assert_eq!(difference(&a, &b)?, vec![Value::from(1), Value::from(3)]);
/// # Ok::<(), treekit::Error>(())
/// ```
pub fn difference(a: &[Value], b: &[Value]) -> Result<Vec<Value>> {
    let mut out = Vec::new();
    for item in a {
        if !contains(b, item)? {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// The elements of `a` that also occur in `b`. Duplicates within `a` are
/// kept.
pub fn intersection(a: &[Value], b: &[Value]) -> Result<Vec<Value>> {
    let mut out = Vec::new();
    for item in a {
        if contains(b, item)? {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// Splits `items` into consecutive runs of `size` elements; the last run
/// may be shorter.
///
/// # Errors
///
/// [`TreeError::InvalidArgument`] if `size` is zero.
pub fn chunk(items: &[Value], size: usize) -> Result<Vec<Vec<Value>>> {
    if size == 0 {
        return Err(TreeError::InvalidArgument {
            reason: "chunk size must be at least 1".to_string(),
        }
        .into());
    }
    Ok(items.chunks(size).map(<[Value]>::to_vec).collect())
}

/// A new document with only the fields of `doc` named in `keys`, in the
/// order they appear in `doc`. Names with no field are ignored.
pub fn pick<K: AsRef<str>>(doc: &Doc, keys: &[K]) -> Doc {
    doc.entries()
        .into_iter()
        .filter(|(key, _)| keys.iter().any(|k| k.as_ref() == key))
        .collect()
}

/// The keys of `doc` whose value structurally equals `value`, in document
/// order.
pub fn keys_by_value(doc: &Doc, value: &Value) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    for (key, candidate) in doc.entries() {
        if equals(&candidate, value)? {
            keys.push(key);
        }
    }
    Ok(keys)
}
