//! Cycle detection for shared tree nodes.
//!
//! Because [`Doc`](crate::tree::Doc) and [`List`](crate::tree::List) are
//! shared handles, a value can contain itself. Every recursive operation
//! tracks the branch nodes on its current descent chain in an [`Ancestry`]
//! and fails with [`TreeError::Cycle`] when a node reappears on that chain.
//!
//! A node reached twice through *different* chains (a shared subtree) is
//! not a cycle.

use std::collections::HashSet;

use crate::tree::{TreeError, Value};

/// Identity of a branch node: the address of its shared storage.
pub(crate) type NodeId = usize;

/// One step of a descent chain, kept for error messages.
#[derive(Debug, Clone)]
pub(crate) enum Step {
    Key(String),
    Index(usize),
}

/// The branch nodes on the current descent chain, plus the steps taken.
#[derive(Debug, Default)]
pub(crate) struct Ancestry {
    open: HashSet<NodeId>,
    steps: Vec<Step>,
}

impl Ancestry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Marks the branch behind `value` as open. Leaves are ignored.
    pub(crate) fn enter(&mut self, value: &Value) -> Result<(), TreeError> {
        let Some(id) = value.node_id() else {
            return Ok(());
        };
        if !self.open.insert(id) {
            let path = self.location();
            tracing::debug!(path = %path, "Rejected cyclic value");
            return Err(TreeError::Cycle { path });
        }
        Ok(())
    }

    /// Closes the branch behind `value`.
    pub(crate) fn leave(&mut self, value: &Value) {
        if let Some(id) = value.node_id() {
            self.open.remove(&id);
        }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn pop(&mut self) {
        self.steps.pop();
    }

    /// Renders the steps taken so far, e.g. `a.b[2].c`.
    pub(crate) fn location(&self) -> String {
        if self.steps.is_empty() {
            return "(root)".to_string();
        }
        let mut out = String::new();
        for step in &self.steps {
            match step {
                Step::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Step::Index(index) => out.push_str(&format!("[{index}]")),
            }
        }
        out
    }
}

/// Verifies that no node of `value` reaches itself.
///
/// Runs in time linear in the number of distinct nodes: a subtree already
/// proven acyclic is not walked again when it is shared.
///
/// ```
/// use treekit::tree::{Doc, ensure_acyclic};
///
/// let doc = Doc::new().with("a", 1);
/// assert!(ensure_acyclic(&doc.clone().into()).is_ok());
///
/// let mut alias = doc.clone();
/// alias.insert("me", doc.clone());
/// assert!(ensure_acyclic(&doc.into()).unwrap_err().is_cycle_error());
/// ```
pub fn ensure_acyclic(value: &Value) -> Result<(), TreeError> {
    let mut ancestry = Ancestry::new();
    let mut finished = HashSet::new();
    scan(value, &mut ancestry, &mut finished)
}

fn scan(
    value: &Value,
    ancestry: &mut Ancestry,
    finished: &mut HashSet<NodeId>,
) -> Result<(), TreeError> {
    let Some(id) = value.node_id() else {
        return Ok(());
    };
    if finished.contains(&id) {
        return Ok(());
    }

    ancestry.enter(value)?;
    match value {
        Value::Doc(doc) => {
            for (key, child) in doc.fields().iter() {
                ancestry.push(Step::Key(key.clone()));
                scan(child, ancestry, finished)?;
                ancestry.pop();
            }
        }
        Value::List(list) => {
            for (index, child) in list.items().iter().enumerate() {
                ancestry.push(Step::Index(index));
                scan(child, ancestry, finished)?;
                ancestry.pop();
            }
        }
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_) => {}
    }
    ancestry.leave(value);

    finished.insert(id);
    Ok(())
}
