//! JSON interchange for trees.
//!
//! `Value`, `Doc` and `List` implement serde's `Serialize`/`Deserialize`
//! with plain JSON shapes (null, bool, number, string, array, object).
//! Serializing a cyclic value fails instead of recursing forever.
//!
//! Conversions from `serde_json::Value` are infallible for `Value` and
//! require an object for `Doc`.
//!
//! ```
//! use serde_json::json;
//! use treekit::tree::{Doc, Value};
//!
//! let doc = Doc::try_from(json!({"user": {"name": "Alice", "tags": ["a", "b"]}}))?;
//! assert_eq!(doc.get_path("user.name"), Some(Value::from("Alice")));
//!
//! let text = Value::from(doc).to_json_string()?;
//! assert_eq!(text, r#"{"user":{"name":"Alice","tags":["a","b"]}}"#);
//! # Ok::<(), treekit::Error>(())
//! ```

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

use crate::tree::{Doc, List, TreeError, Value, ensure_acyclic};

impl Value {
    /// Converts to a `serde_json::Value`.
    ///
    /// Non-finite floats become `null`, as JSON has no representation for them.
    ///
    /// # Errors
    ///
    /// [`TreeError::Cycle`] if the value contains itself.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        ensure_acyclic(self)?;
        Ok(json_of(self))
    }

    /// Renders as compact JSON text.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    /// Renders as indented JSON text.
    pub fn to_json_string_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }

    /// Parses JSON text into a fresh tree.
    pub fn from_json_str(text: &str) -> crate::Result<Value> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Doc {
    /// Parses JSON text that must hold an object.
    pub fn from_json_str(text: &str) -> crate::Result<Doc> {
        let value = Value::from_json_str(text)?;
        Ok(Doc::try_from(&value)?)
    }
}

fn json_of(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::from(*n),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::List(list) => serde_json::Value::Array(list.items().iter().map(json_of).collect()),
        Value::Doc(doc) => serde_json::Value::Object(
            doc.fields()
                .iter()
                .map(|(k, v)| (k.clone(), json_of(v)))
                .collect(),
        ),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Doc(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<serde_json::Value> for Doc {
    type Error = TreeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Doc::try_from(&Value::from(json))
    }
}

impl TryFrom<serde_json::Value> for List {
    type Error = TreeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        List::try_from(&Value::from(json))
    }
}

// Serialization of a value already proven acyclic.
struct Acyclic<'a>(&'a Value);

impl Serialize for Acyclic<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(list) => {
                let items = list.items();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(&Acyclic(item))?;
                }
                seq.end()
            }
            Value::Doc(doc) => {
                let fields = doc.fields();
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, item) in fields.iter() {
                    map.serialize_entry(key, &Acyclic(item))?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ensure_acyclic(self).map_err(<S::Error as serde::ser::Error>::custom)?;
        Acyclic(self).serialize(serializer)
    }
}

impl Serialize for Doc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::Doc(self.clone()).serialize(serializer)
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::List(self.clone()).serialize(serializer)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON-shaped value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items.into_iter().collect()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut doc = Doc::new();
        while let Some((key, item)) = map.next_entry::<String, Value>()? {
            doc.insert(key, item);
        }
        Ok(Value::Doc(doc))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Doc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Doc(doc) => Ok(doc),
            other => Err(de::Error::custom(format!(
                "expected a document, found {}",
                other.type_name()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::List(list) => Ok(list),
            other => Err(de::Error::custom(format!(
                "expected a list, found {}",
                other.type_name()
            ))),
        }
    }
}
