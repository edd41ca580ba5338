//! The tree data model.
//!
//! A tree value is a primitive, a sequence, or a mapping:
//!
//! - [`Value`] - the tagged union every operation matches on
//! - [`Doc`] - an insertion-ordered, string-keyed mapping (shared handle)
//! - [`List`] - an ordered sequence (shared handle)
//! - [`Path`] / [`PathBuf`] - dotted locations inside nested documents
//!
//! # Traits
//!
//! - [`Merge`] - recursive combination, in place or into a new tree

pub mod doc;
pub mod errors;
pub(crate) mod guard;
pub mod json;
pub mod list;
pub mod path;
pub mod traits;
pub mod value;

pub use doc::Doc;
pub use errors::TreeError;
pub use guard::ensure_acyclic;
pub use list::List;
pub use path::{Path, PathBuf};
pub use traits::Merge;
pub use value::Value;
