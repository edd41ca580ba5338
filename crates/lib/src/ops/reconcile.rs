//! Keyed reconciliation of record sequences.
//!
//! A record is a [`Doc`]. Every operation here extracts a comparable
//! [`RecordKey`] from each record through a [`KeySelector`] and combines,
//! partitions or filters the sequence by that key.
//!
//! A record without the selected field gets [`RecordKey::Missing`]. That key
//! is distinct from every real value, including `null`, so records lacking
//! the field share one bucket of their own.

use std::{collections::HashSet, fmt, rc::Rc};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    Result,
    ops::{equals, merge::shallow_merge},
    tree::{
        Doc, Path, PathBuf, TreeError, Value,
        guard::{Ancestry, Step},
        value::integral,
    },
};

/// A key extracted from a record, comparable and hashable.
///
/// Numbers are normalized so that `1` and `1.0` are the same key, as are
/// `0.0` and `-0.0`; every NaN is the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// The record has no value at the selected location.
    Missing,
    Null,
    Bool(bool),
    Int(i64),
    /// A non-integral float, stored by its bit pattern.
    Float(u64),
    Text(String),
}

impl RecordKey {
    /// Derives a key from a primitive value. Lists and documents have none.
    pub fn from_value(value: &Value) -> Option<RecordKey> {
        Some(match value {
            Value::Null => RecordKey::Null,
            Value::Bool(b) => RecordKey::Bool(*b),
            Value::Int(n) => RecordKey::Int(*n),
            Value::Float(f) if f.is_nan() => RecordKey::Float(f64::NAN.to_bits()),
            Value::Float(f) => match integral(*f) {
                Some(n) => RecordKey::Int(n),
                None => RecordKey::Float(f.to_bits()),
            },
            Value::Text(s) => RecordKey::Text(s.clone()),
            Value::List(_) | Value::Doc(_) => return None,
        })
    }

    /// The key as a value; `None` for [`RecordKey::Missing`].
    pub fn to_value(&self) -> Option<Value> {
        Some(match self {
            RecordKey::Missing => return None,
            RecordKey::Null => Value::Null,
            RecordKey::Bool(b) => Value::Bool(*b),
            RecordKey::Int(n) => Value::Int(*n),
            RecordKey::Float(bits) => Value::Float(f64::from_bits(*bits)),
            RecordKey::Text(s) => Value::Text(s.clone()),
        })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RecordKey::Missing)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Missing => f.write_str("<missing>"),
            RecordKey::Null => f.write_str("null"),
            RecordKey::Bool(b) => write!(f, "{b}"),
            RecordKey::Int(n) => write!(f, "{n}"),
            RecordKey::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            RecordKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        RecordKey::Text(s.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        RecordKey::Text(s)
    }
}

impl From<i64> for RecordKey {
    fn from(n: i64) -> Self {
        RecordKey::Int(n)
    }
}

impl From<bool> for RecordKey {
    fn from(b: bool) -> Self {
        RecordKey::Bool(b)
    }
}

type KeyFn = Rc<dyn Fn(&Doc) -> RecordKey>;

/// Chooses the key of a record.
///
/// `&str` and `String` convert into a field selector, so most call sites
/// pass the field name directly:
///
/// ```
/// use serde_json::json;
/// use treekit::{ops::{KeySelector, RecordKey}, tree::Doc};
///
/// let record = Doc::try_from(json!({"id": 7, "owner": {"name": "ann"}}))?;
///
/// assert_eq!(KeySelector::from("id").select(&record)?, RecordKey::Int(7));
/// assert_eq!(KeySelector::path("owner.name").select(&record)?, RecordKey::from("ann"));
/// assert_eq!(KeySelector::field("nope").select(&record)?, RecordKey::Missing);
///
/// let by_len = KeySelector::by(|doc: &Doc| RecordKey::Int(doc.len() as i64));
/// assert_eq!(by_len.select(&record)?, RecordKey::Int(2));
/// # Ok::<(), treekit::Error>(())
/// ```
#[derive(Clone)]
pub enum KeySelector {
    /// A top-level field, taken literally (dots included).
    Field(String),
    /// A dotted path into nested documents.
    Path(PathBuf),
    /// An arbitrary function of the record.
    By(KeyFn),
}

impl KeySelector {
    pub fn field(name: impl Into<String>) -> Self {
        KeySelector::Field(name.into())
    }

    pub fn path(path: impl AsRef<Path>) -> Self {
        KeySelector::Path(path.as_ref().to_path_buf())
    }

    pub fn by(f: impl Fn(&Doc) -> RecordKey + 'static) -> Self {
        KeySelector::By(Rc::new(f))
    }

    /// Extracts the key of `record`.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidKey`] if a field or path selector lands on a list
    /// or document.
    pub fn select(&self, record: &Doc) -> Result<RecordKey> {
        let (found, location) = match self {
            KeySelector::By(f) => return Ok(f(record)),
            KeySelector::Field(name) => (record.get(name), name.as_str()),
            KeySelector::Path(path) => (record.get_path(path), path.as_str()),
        };

        let Some(value) = found else {
            return Ok(RecordKey::Missing);
        };
        RecordKey::from_value(&value).ok_or_else(|| {
            TreeError::InvalidKey {
                field: location.to_string(),
                found: value.type_name(),
            }
            .into()
        })
    }
}

impl fmt::Debug for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            KeySelector::Path(path) => f.debug_tuple("Path").field(&path.as_str()).finish(),
            KeySelector::By(_) => f.write_str("By(<fn>)"),
        }
    }
}

impl From<&str> for KeySelector {
    fn from(name: &str) -> Self {
        KeySelector::field(name)
    }
}

impl From<String> for KeySelector {
    fn from(name: String) -> Self {
        KeySelector::Field(name)
    }
}

impl From<&KeySelector> for KeySelector {
    fn from(selector: &KeySelector) -> Self {
        selector.clone()
    }
}

/// Records partitioned by key, in first-occurrence order of each key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups {
    buckets: IndexMap<RecordKey, Vec<Doc>>,
}

impl Groups {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, key: &RecordKey) -> Option<&[Doc]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RecordKey> {
        self.buckets.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecordKey, &[Doc])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_inner(self) -> IndexMap<RecordKey, Vec<Doc>> {
        self.buckets
    }

    /// Renders the groups as a document mapping each key's display form to
    /// a list of its records.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyCollision`] when two distinct keys share a display
    /// form, such as `RecordKey::Int(1)` and `RecordKey::Text("1")`.
    pub fn to_doc(&self) -> Result<Doc> {
        let mut out = Doc::new();
        for (key, records) in &self.buckets {
            let label = key.to_string();
            if out.contains_key(&label) {
                return Err(TreeError::KeyCollision { label }.into());
            }
            out.insert(label, records.iter().cloned().map(Value::Doc).collect::<Vec<_>>());
        }
        Ok(out)
    }
}

impl IntoIterator for Groups {
    type Item = (RecordKey, Vec<Doc>);
    type IntoIter = indexmap::map::IntoIter<RecordKey, Vec<Doc>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Combines two record sequences by key.
///
/// Records of `a` come first in their original order, followed by records
/// whose key only `b` has, in their original order. When `b` has a key
/// already seen, the two records are combined with [`shallow_merge`] and the
/// result takes the earlier record's position. A duplicate key within `a`
/// keeps the position of the first record, but the later record replaces
/// it whole.
///
/// Records that were not combined are shared with the inputs, not copied.
///
/// ```
/// use serde_json::json;
/// use treekit::{ops::merge_by_key, tree::{Doc, Value}};
///
/// let a = vec![Doc::try_from(json!({"id": 1, "a": 1}))?];
/// let b = vec![Doc::try_from(json!({"id": 1, "a": 2, "b": 3}))?];
/// let out = merge_by_key(&a, &b, "id")?;
/// assert_eq!(out.len(), 1);
/// assert_eq!(Value::from(out[0].clone()), Value::from(json!({"id": 1, "a": 2, "b": 3})));
/// # Ok::<(), treekit::Error>(())
/// ```
pub fn merge_by_key(a: &[Doc], b: &[Doc], key: impl Into<KeySelector>) -> Result<Vec<Doc>> {
    let selector = key.into();
    let mut by_key: IndexMap<RecordKey, Doc> = IndexMap::with_capacity(a.len() + b.len());

    for record in a {
        by_key.insert(selector.select(record)?, record.clone());
    }
    for record in b {
        let k = selector.select(record)?;
        match by_key.get_mut(&k) {
            Some(existing) => *existing = shallow_merge(existing, record),
            None => {
                by_key.insert(k, record.clone());
            }
        }
    }

    debug!(
        left = a.len(),
        right = b.len(),
        merged = by_key.len(),
        "Merged records by key"
    );
    Ok(by_key.into_values().collect())
}

/// Partitions records into buckets by key.
///
/// Buckets appear in first-occurrence order of their key; each bucket keeps
/// the original relative order of its records.
pub fn group_by(records: &[Doc], key: impl Into<KeySelector>) -> Result<Groups> {
    let selector = key.into();
    let mut buckets: IndexMap<RecordKey, Vec<Doc>> = IndexMap::new();
    for record in records {
        buckets
            .entry(selector.select(record)?)
            .or_default()
            .push(record.clone());
    }

    debug!(records = records.len(), groups = buckets.len(), "Grouped records");
    Ok(Groups { buckets })
}

/// Keeps the first record seen for each key, in original order.
///
/// ```
/// use serde_json::json;
/// use treekit::{ops::deduplicate, tree::Doc};
///
/// let records = vec![
///     Doc::try_from(json!({"id": 1, "v": "a"}))?,
///     Doc::try_from(json!({"id": 1, "v": "b"}))?,
/// ];
/// let kept = deduplicate(&records, "id")?;
/// assert_eq!(kept, vec![records[0].clone()]);
/// # Ok::<(), treekit::Error>(())
/// ```
pub fn deduplicate(records: &[Doc], key: impl Into<KeySelector>) -> Result<Vec<Doc>> {
    let selector = key.into();
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for record in records {
        if seen.insert(selector.select(record)?) {
            kept.push(record.clone());
        }
    }

    debug!(records = records.len(), kept = kept.len(), "Deduplicated records");
    Ok(kept)
}

/// Indexes records by key. A later record replaces an earlier one with the
/// same key but keeps its position.
pub fn index_by(
    records: &[Doc],
    key: impl Into<KeySelector>,
) -> Result<IndexMap<RecordKey, Doc>> {
    let selector = key.into();
    let mut index = IndexMap::with_capacity(records.len());
    for record in records {
        index.insert(selector.select(record)?, record.clone());
    }
    Ok(index)
}

fn value_at_equals(record: &Doc, path: &Path, value: &Value) -> Result<bool> {
    match record.get_path(path) {
        Some(found) => equals(&found, value),
        None => Ok(false),
    }
}

/// Returns the records whose value at `path` structurally equals `value`.
///
/// # Errors
///
/// [`TreeError::Cycle`] if a compared value contains itself.
pub fn filter_by(records: &[Doc], path: impl AsRef<Path>, value: &Value) -> Result<Vec<Doc>> {
    let path = path.as_ref();
    let mut found = Vec::new();
    for record in records {
        if value_at_equals(record, path, value)? {
            found.push(record.clone());
        }
    }
    Ok(found)
}

/// Returns the first record whose value at `path` equals `value`.
pub fn find_by(records: &[Doc], path: impl AsRef<Path>, value: &Value) -> Result<Option<Doc>> {
    let path = path.as_ref();
    for record in records {
        if value_at_equals(record, path, value)? {
            return Ok(Some(record.clone()));
        }
    }
    Ok(None)
}

/// Returns a new sequence where every record whose value at `path` equals
/// `value` is replaced by a [`shallow_merge`] of it with `patch`.
///
/// The input records are not modified.
pub fn update_where(
    records: &[Doc],
    path: impl AsRef<Path>,
    value: &Value,
    patch: &Doc,
) -> Result<Vec<Doc>> {
    let path = path.as_ref();
    records
        .iter()
        .map(|record| -> Result<Doc> {
            Ok(if value_at_equals(record, path, value)? {
                shallow_merge(record, patch)
            } else {
                record.clone()
            })
        })
        .collect()
}

/// Searches a forest depth-first for a record whose value at `path` equals
/// `value`.
///
/// Each record may hold a list of child records under the `children` field;
/// the search descends into it after checking the record itself. Children
/// that are not documents are skipped.
///
/// ```
/// use serde_json::json;
/// use treekit::{ops::find_in_tree, tree::{Doc, Value}};
///
/// let menu = vec![Doc::try_from(json!({
///     "path": "/",
///     "data": [{"path": "/settings", "data": [{"path": "/settings/keys", "title": "Keys"}]}]
/// }))?];
/// let hit = find_in_tree(&menu, "path", &Value::from("/settings/keys"), "data")?;
/// assert_eq!(hit.and_then(|d| d.get("title")), Some(Value::from("Keys")));
/// # Ok::<(), treekit::Error>(())
/// ```
///
/// # Errors
///
/// [`TreeError::Cycle`] if a record is its own descendant.
pub fn find_in_tree(
    records: &[Doc],
    path: impl AsRef<Path>,
    value: &Value,
    children: &str,
) -> Result<Option<Doc>> {
    let mut ancestry = Ancestry::new();
    search(records, path.as_ref(), value, children, &mut ancestry)
}

fn search(
    records: &[Doc],
    path: &Path,
    value: &Value,
    children: &str,
    ancestry: &mut Ancestry,
) -> Result<Option<Doc>> {
    for (index, record) in records.iter().enumerate() {
        let node = Value::Doc(record.clone());
        ancestry.push(Step::Index(index));
        ancestry.enter(&node)?;

        if value_at_equals(record, path, value)? {
            return Ok(Some(record.clone()));
        }

        if let Some(Value::List(nested)) = record.get(children) {
            let nested: Vec<Doc> = nested
                .to_vec()
                .into_iter()
                .filter_map(|child| match child {
                    Value::Doc(doc) => Some(doc),
                    _ => None,
                })
                .collect();
            ancestry.push(Step::Key(children.to_string()));
            if let Some(hit) = search(&nested, path, value, children, ancestry)? {
                return Ok(Some(hit));
            }
            ancestry.pop();
        }

        ancestry.leave(&node);
        ancestry.pop();
    }
    Ok(None)
}
