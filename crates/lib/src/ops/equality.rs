//! Structural equality.

use crate::{
    Result,
    tree::{Value, ensure_acyclic, value::numbers_equal},
};

/// Compares two trees for deep equivalence.
///
/// - Primitives compare by value; numbers compare across `Int`/`Float`.
/// - Lists are equal when they have the same length and pairwise-equal
///   elements, in order.
/// - Documents are equal when they have the same key set and equal values
///   per key; key order is irrelevant.
/// - Values of different shapes are unequal. This is an answer, not an error.
///
/// # Errors
///
/// [`TreeError::Cycle`](crate::tree::TreeError::Cycle) if either side
/// contains itself, regardless of whether the comparison would have reached
/// the cycle.
///
/// ```
/// use serde_json::json;
/// use treekit::{ops::equals, tree::Value};
///
/// let a = Value::from(json!({"x": 1, "y": [1, 2]}));
/// let b = Value::from(json!({"y": [1, 2], "x": 1.0}));
/// assert!(equals(&a, &b)?);
///
/// let c = Value::from(json!({"x": 1, "y": [2, 1]}));
/// assert!(!equals(&a, &c)?);
/// # Ok::<(), treekit::Error>(())
/// ```
pub fn equals(a: &Value, b: &Value) -> Result<bool> {
    ensure_acyclic(a)?;
    ensure_acyclic(b)?;
    Ok(structurally_equal(a, b))
}

// Both sides are known to be acyclic.
fn structurally_equal(a: &Value, b: &Value) -> bool {
    if let Some(same) = numbers_equal(a, b) {
        return same;
    }

    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::List(x), Value::List(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            let (left, right) = (x.items(), y.items());
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(l, r)| structurally_equal(l, r))
        }
        (Value::Doc(x), Value::Doc(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            let (left, right) = (x.fields(), y.fields());
            left.len() == right.len()
                && left.iter().all(|(key, l)| {
                    right
                        .get(key)
                        .is_some_and(|r| structurally_equal(l, r))
                })
        }
        _ => false,
    }
}
