use serde_json::json;
use treekit::{Doc, List, Value};

// ==========================
// FIXTURE BUILDERS
// ==========================

/// Builds a document from a JSON object literal.
pub fn doc(json: serde_json::Value) -> Doc {
    Doc::try_from(json).expect("fixture must be a JSON object")
}

/// Builds a value from any JSON literal.
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Builds a record sequence from a JSON array of objects.
pub fn records(json: serde_json::Value) -> Vec<Doc> {
    List::try_from(json)
        .expect("fixture must be a JSON array")
        .to_vec()
        .iter()
        .map(|item| Doc::try_from(item).expect("fixture items must be objects"))
        .collect()
}

/// A document that holds itself under `"me"`, next to an ordinary field.
pub fn self_referencing_doc() -> Doc {
    let doc = doc(json!({"name": "loop"}));
    let mut alias = doc.clone();
    alias.insert("me", doc.clone());
    doc
}

/// A document that reaches itself two levels down: `{"a": {"b": [<root>]}}`.
pub fn indirectly_cyclic_doc() -> Doc {
    let root = Doc::new();
    let list = List::from(vec![Value::Doc(root.clone())]);
    let mut alias = root.clone();
    alias.insert("a", Doc::new().with("b", list));
    root
}

// ==========================
// ASSERTIONS
// ==========================

/// Assert that a tree renders to the expected JSON, key order included.
pub fn assert_json(actual: impl Into<Value>, expected: serde_json::Value) {
    let actual = actual.into().to_json().expect("value should be acyclic");
    assert_eq!(
        serde_json::to_string(&actual).unwrap(),
        serde_json::to_string(&expected).unwrap()
    );
}

/// Assert that a sequence of records renders to the expected JSON array.
pub fn assert_records(actual: &[Doc], expected: serde_json::Value) {
    assert_json(actual.to_vec(), expected);
}
