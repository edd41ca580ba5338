//! The sequence node of a tree.
//!
//! [`List`] is an ordered, index-addressed collection of [`Value`]s with the
//! same shared-handle semantics as [`Doc`](crate::tree::Doc): cloning a
//! `List` shares its storage, and [`List::deep_clone`] copies it.

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use crate::tree::{Value, guard::NodeId};

/// A shared, ordered sequence of values.
#[derive(Clone, Default)]
pub struct List {
    inner: Rc<RefCell<Vec<Value>>>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<Value> {
        self.inner.borrow().get(index).cloned()
    }

    /// Appends an element
    pub fn push(&mut self, value: impl Into<Value>) {
        self.inner.borrow_mut().push(value.into());
    }

    /// Removes and returns the element at `index`, shifting later elements down
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        let mut items = self.inner.borrow_mut();
        (index < items.len()).then(|| items.remove(index))
    }

    /// Replaces the element at `index`, returning the old one
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let mut items = self.inner.borrow_mut();
        let slot = items.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.inner.borrow_mut().clear();
    }

    /// Returns a snapshot of the elements.
    ///
    /// Nested documents and lists in the snapshot are handles to the live
    /// nodes, not copies.
    pub fn to_vec(&self) -> Vec<Value> {
        self.inner.borrow().clone()
    }

    /// Returns true if both handles refer to the same storage
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.inner) as *const () as NodeId
    }

    pub(crate) fn items(&self) -> Ref<'_, Vec<Value>> {
        self.inner.borrow()
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        List {
            inner: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for List {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Into::into).collect()
    }
}
