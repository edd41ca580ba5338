//! Structural clone.

use crate::{
    Result,
    tree::{
        Doc, List, TreeError, Value,
        guard::{Ancestry, Step},
    },
};

/// Produces an independent copy of a tree.
///
/// Primitives are copied; every document and list is rebuilt, so the copy
/// shares no storage with the original. A subtree that appears twice in the
/// original (shared, not cyclic) appears as two separate copies.
///
/// # Errors
///
/// [`TreeError::Cycle`](crate::tree::TreeError::Cycle) if the value
/// contains itself.
///
/// ```
/// use treekit::{ops::deep_clone, tree::{Doc, Value}};
///
/// let original = Value::Doc(Doc::new().with("inner", Doc::new().with("n", 1)));
/// let copy = deep_clone(&original)?;
/// assert_eq!(copy, original);
///
/// copy.as_doc().unwrap().clone().set_path("inner.n", 2)?;
/// assert_eq!(original.as_doc().unwrap().get_path("inner.n"), Some(Value::Int(1)));
/// # Ok::<(), treekit::Error>(())
/// ```
pub fn deep_clone(value: &Value) -> Result<Value> {
    Ok(copy(value, &mut Ancestry::new())?)
}

fn copy(value: &Value, ancestry: &mut Ancestry) -> std::result::Result<Value, TreeError> {
    Ok(match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Int(n) => Value::Int(*n),
        Value::Float(f) => Value::Float(*f),
        Value::Text(s) => Value::Text(s.clone()),
        Value::List(list) => Value::List(copy_list(list, ancestry)?),
        Value::Doc(doc) => Value::Doc(copy_doc(doc, ancestry)?),
    })
}

pub(crate) fn copy_list(
    list: &List,
    ancestry: &mut Ancestry,
) -> std::result::Result<List, TreeError> {
    let node = Value::List(list.clone());
    ancestry.enter(&node)?;
    let mut items = Vec::with_capacity(list.len());
    for (index, item) in list.items().iter().enumerate() {
        ancestry.push(Step::Index(index));
        items.push(copy(item, ancestry)?);
        ancestry.pop();
    }
    ancestry.leave(&node);
    Ok(items.into_iter().collect())
}

pub(crate) fn copy_doc(
    doc: &Doc,
    ancestry: &mut Ancestry,
) -> std::result::Result<Doc, TreeError> {
    let node = Value::Doc(doc.clone());
    ancestry.enter(&node)?;
    let mut fields = Vec::with_capacity(doc.len());
    for (key, item) in doc.fields().iter() {
        ancestry.push(Step::Key(key.clone()));
        fields.push((key.clone(), copy(item, ancestry)?));
        ancestry.pop();
    }
    ancestry.leave(&node);
    Ok(fields.into_iter().collect())
}

impl Value {
    /// Produces an independent copy. See [`deep_clone`].
    pub fn deep_clone(&self) -> Result<Value> {
        deep_clone(self)
    }
}

impl Doc {
    /// Produces an independent copy. See [`deep_clone`].
    pub fn deep_clone(&self) -> Result<Doc> {
        Ok(copy_doc(self, &mut Ancestry::new())?)
    }
}

impl List {
    /// Produces an independent copy. See [`deep_clone`].
    pub fn deep_clone(&self) -> Result<List> {
        Ok(copy_list(self, &mut Ancestry::new())?)
    }
}
