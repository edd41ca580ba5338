//! Recursive operations over trees.
//!
//! - [`equality`] - structural comparison
//! - [`clone`] - independent copies
//! - [`merge`] - deep and shallow combination
//! - [`flatten`] - nested documents to dotted keys and back
//! - [`reconcile`] - keyed combination, grouping and de-duplication of records
//! - [`collection`] - set-like helpers over value sequences
//!
//! Every recursive operation rejects cyclic input with
//! [`TreeError::Cycle`](crate::tree::TreeError::Cycle) instead of recursing
//! without bound.

pub mod clone;
pub mod collection;
pub mod equality;
pub mod flatten;
pub mod merge;
pub mod reconcile;

pub use clone::deep_clone;
pub use collection::{chunk, contains, difference, intersection, keys_by_value, pick, union, unique};
pub use equality::equals;
pub use flatten::{EmptyDocs, FlattenOptions, flatten, flatten_with, unflatten, unflatten_with};
pub use merge::{merge_into, merged, shallow_merge};
pub use reconcile::{
    Groups, KeySelector, RecordKey, deduplicate, filter_by, find_by, find_in_tree, group_by,
    index_by, merge_by_key, update_where,
};
