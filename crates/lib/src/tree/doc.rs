//! The mapping node of a tree.
//!
//! [`Doc`] is a string-keyed, insertion-ordered collection of [`Value`]s.
//! It is a shared handle: cloning a `Doc` produces a second handle to the
//! same storage, the way two variables can refer to one object. Use
//! [`Doc::deep_clone`] for an independent copy.
//!
//! Methods that change the contents take `&mut self`. Holding another
//! handle to the same storage and reading it after a write observes the
//! write; callers that need an unmodified original must deep-clone first.
//!
//! # Examples
//!
//! ```
//! use treekit::tree::{Doc, Value};
//!
//! let mut doc = Doc::new();
//! doc.insert("name", "Alice");
//! doc.set_path("user.profile.bio", "Software developer")?;
//!
//! assert_eq!(doc.get_as::<String>("name"), Some("Alice".to_string()));
//! assert_eq!(doc.get_path("user.profile.bio"), Some(Value::from("Software developer")));
//! assert_eq!(doc.get_path("user.missing.bio"), None);
//! # Ok::<(), treekit::Error>(())
//! ```

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use indexmap::IndexMap;

use crate::tree::{Path, TreeError, Value, guard::NodeId};

/// A shared, insertion-ordered mapping from string keys to values.
#[derive(Clone, Default)]
pub struct Doc {
    inner: Rc<RefCell<IndexMap<String, Value>>>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns true if this document has no keys
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Returns true if the document has the given direct key
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// Gets the value stored under a direct key.
    ///
    /// The key is used verbatim, dots included. Use [`Doc::get_path`] to
    /// descend into nested documents.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.borrow().get(key).cloned()
    }

    /// Stores a value under a direct key, returning the previous value.
    ///
    /// Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.borrow_mut().insert(key.into(), value.into())
    }

    /// Removes a direct key, preserving the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.borrow_mut().shift_remove(key)
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.inner.borrow_mut().clear();
    }

    /// Returns the keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }

    /// Returns the values in insertion order
    pub fn values(&self) -> Vec<Value> {
        self.inner.borrow().values().cloned().collect()
    }

    /// Returns a snapshot of the entries in insertion order.
    ///
    /// Nested documents and lists in the snapshot are handles to the live
    /// nodes, not copies.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.inner
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns true if both handles refer to the same storage
    pub fn ptr_eq(&self, other: &Doc) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.inner) as *const () as NodeId
    }

    pub(crate) fn fields(&self) -> Ref<'_, IndexMap<String, Value>> {
        self.inner.borrow()
    }

    /// Builder method to insert a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

// Path access
impl Doc {
    /// Reads the value at a dotted path.
    ///
    /// Returns `None` as soon as a step is missing or lands on something
    /// that is not a document, and for a path without components. Lists
    /// are never indexed into.
    pub fn get_path(&self, path: impl AsRef<Path>) -> Option<Value> {
        let mut segments = path.as_ref().components();
        let mut current = self.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Doc(doc) => doc.get(segment)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Reads the value at a dotted path with conversion through `TryFrom`.
    ///
    /// Returns `None` if the path is missing or the value has another type.
    ///
    /// ```
    /// # use treekit::tree::Doc;
    /// let mut doc = Doc::new();
    /// doc.set_path("user.age", 30)?;
    ///
    /// assert_eq!(doc.get_as::<i64>("user.age"), Some(30));
    /// assert_eq!(doc.get_as::<String>("user.age"), None);
    /// # Ok::<(), treekit::Error>(())
    /// ```
    pub fn get_as<T>(&self, path: impl AsRef<Path>) -> Option<T>
    where
        T: for<'a> TryFrom<&'a Value, Error = TreeError>,
    {
        let value = self.get_path(path)?;
        T::try_from(&value).ok()
    }

    /// Writes a value at a dotted path, creating intermediate documents.
    ///
    /// Every non-final step that is missing, or holds something other than a
    /// document, is replaced with a fresh empty document before descending.
    /// Returns the value previously stored at the final step. Afterwards
    /// `get_path(path)` yields `value`.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidPath`] if the path has no components. Nothing is
    /// modified in that case.
    pub fn set_path(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> crate::Result<Option<Value>> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        if segments.is_empty() {
            return Err(TreeError::InvalidPath {
                path: format!("'{}' (empty path not allowed for writes)", path.as_str()),
            }
            .into());
        }
        Ok(self.set_segments(&segments, value.into()))
    }

    /// Writes along already-split segments. `segments` must be non-empty.
    pub(crate) fn set_segments(&mut self, segments: &[&str], value: Value) -> Option<Value> {
        let Some((last, parents)) = segments.split_last() else {
            return None;
        };

        let mut current = self.clone();
        for segment in parents {
            current = match current.get(segment) {
                Some(Value::Doc(doc)) => doc,
                _ => {
                    let fresh = Doc::new();
                    current.insert(*segment, fresh.clone());
                    fresh
                }
            };
        }

        current.insert(*last, value)
    }

    /// Removes the value at a dotted path and returns it.
    ///
    /// Missing intermediate steps are not created; the call returns
    /// `Ok(None)` instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidPath`] if the path has no components.
    pub fn remove_path(&mut self, path: impl AsRef<Path>) -> crate::Result<Option<Value>> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(TreeError::InvalidPath {
                path: format!("'{}' (empty path not allowed for removal)", path.as_str()),
            }
            .into());
        };

        let mut current = self.clone();
        for segment in parents {
            current = match current.get(segment) {
                Some(Value::Doc(doc)) => doc,
                _ => return Ok(None),
            };
        }
        Ok(current.remove(last))
    }
}

impl FromIterator<(String, Value)> for Doc {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Doc {
            inner: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Doc {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        // The iterator may read this document through an alias.
        let pairs: Vec<(String, Value)> = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.inner.borrow_mut().extend(pairs);
    }
}
