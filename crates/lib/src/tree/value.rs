//! The value type of a tree.
//!
//! A [`Value`] is either a leaf (null, boolean, number, text) or a branch
//! ([`Doc`] or [`List`]). Every operation in this crate matches on it
//! exhaustively; there is no other shape.
//!
//! # Numbers
//!
//! Integers and floats are kept apart so integral data round-trips exactly,
//! but they compare as one numeric domain: `Int(1) == Float(1.0)`. `NaN`
//! equals `NaN` and `-0.0` equals `0.0`, so equality stays reflexive.
//!
//! # Direct Comparisons
//!
//! ```
//! # use treekit::tree::Value;
//! let text = Value::from("hello");
//! let number = Value::Int(42);
//!
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(number == 42.0);
//! assert!(!(text == 42));
//! ```

use std::{cell::RefCell, fmt};

use crate::tree::{Doc, List, TreeError, guard::NodeId};

/// A node of a tree: a primitive, a sequence, or a mapping.
#[derive(Clone, Default)]
pub enum Value {
    // Leaf values
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),

    // Branch values
    /// Ordered collection of values
    List(List),
    /// String-keyed mapping of values
    Doc(Doc),
}

impl Value {
    /// Returns true if this is a leaf value (terminal node)
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (can contain other nodes)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Doc(_) | Value::List(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for null and for an empty document or list.
    ///
    /// Empty text and zero are not empty values.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Doc(doc) => doc.is_empty(),
            Value::List(list) => list.is_empty(),
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_) => false,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Doc(_) => "doc",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer. Integral floats convert too.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) => integral(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a float. Integers convert too.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view as a document handle
    pub fn as_doc(&self) -> Option<&Doc> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to view as a mutable document handle
    pub fn as_doc_mut(&mut self) -> Option<&mut Doc> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to view as a list handle
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to view as a mutable list handle
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Identity of the branch node behind this value, if any
    pub(crate) fn node_id(&self) -> Option<NodeId> {
        match self {
            Value::Doc(doc) => Some(doc.node_id()),
            Value::List(list) => Some(list.node_id()),
            _ => None,
        }
    }
}

/// Returns the integer an integral float represents exactly.
pub(crate) fn integral(f: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f)).then_some(f as i64)
}

/// Numeric equality across `Int` and `Float` with SameValueZero semantics.
pub(crate) fn numbers_equal(a: &Value, b: &Value) -> Option<bool> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x == y),
        (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
            Some(integral(*f) == Some(*i))
        }
        (Value::Float(x), Value::Float(y)) => Some(x == y || (x.is_nan() && y.is_nan())),
        _ => None,
    }
}

// Cycle-safe rendering. A branch already being printed is shown as <cycle>.
struct Render<'a> {
    value: &'a Value,
    open: &'a RefCell<Vec<NodeId>>,
}

impl Render<'_> {
    fn child<'b>(&'b self, value: &'b Value) -> Render<'b> {
        Render {
            value,
            open: self.open,
        }
    }

    fn enter(&self) -> bool {
        let Some(id) = self.value.node_id() else {
            return true;
        };
        let mut open = self.open.borrow_mut();
        if open.contains(&id) {
            return false;
        }
        open.push(id);
        true
    }

    fn leave(&self) {
        if self.value.node_id().is_some() {
            self.open.borrow_mut().pop();
        }
    }
}

impl fmt::Debug for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enter() {
            return write!(f, "<cycle>");
        }
        let result = match self.value {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Text(s) => write!(f, "Text({s:?})"),
            Value::List(list) => {
                let items = list.items();
                f.write_str("List ")?;
                f.debug_list()
                    .entries(items.iter().map(|v| self.child(v)))
                    .finish()
            }
            Value::Doc(doc) => {
                let fields = doc.fields();
                f.write_str("Doc ")?;
                f.debug_map()
                    .entries(fields.iter().map(|(k, v)| (k, self.child(v))))
                    .finish()
            }
        };
        self.leave();
        result
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enter() {
            return write!(f, "<cycle>");
        }
        let result = match self.value {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.items().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.child(item))?;
                }
                write!(f, "]")
            }
            Value::Doc(doc) => {
                write!(f, "{{")?;
                for (i, (key, item)) in doc.fields().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", self.child(item))?;
                }
                write!(f, "}}")
            }
        };
        self.leave();
        result
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = RefCell::new(Vec::new());
        fmt::Debug::fmt(&Render { value: self, open: &open }, f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = RefCell::new(Vec::new());
        fmt::Display::fmt(&Render { value: self, open: &open }, f)
    }
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Doc(self.clone()), f)
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::Doc(self.clone()), f)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::List(self.clone()), f)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::List(self.clone()), f)
    }
}

// Structural equality. Cyclic operands compare unequal; use
// `ops::equals` to observe the cycle error instead.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        crate::ops::equals(self, other).unwrap_or(false)
    }
}

impl PartialEq for Doc {
    fn eq(&self, other: &Doc) -> bool {
        Value::Doc(self.clone()) == Value::Doc(other.clone())
    }
}

impl PartialEq for List {
    fn eq(&self, other: &List) -> bool {
        Value::List(self.clone()) == Value::List(other.clone())
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Doc> for Value {
    fn from(value: Doc) -> Self {
        Value::Doc(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(List::from(values))
    }
}

fn mismatch(expected: &str, value: &Value) -> TreeError {
    TreeError::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

impl TryFrom<&Value> for String {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| mismatch("text", value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = TreeError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| mismatch("text", value))
    }
}

impl TryFrom<&Value> for i64 {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| mismatch("int", value))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl TryFrom<&Value> for Doc {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_doc().cloned().ok_or_else(|| mismatch("doc", value))
    }
}

impl TryFrom<&Value> for List {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_list().cloned().ok_or_else(|| mismatch("list", value))
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        numbers_equal(self, &Value::Int(*other)).unwrap_or(false)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self == &(*other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        numbers_equal(self, &Value::Float(*other)).unwrap_or(false)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
