use serde_json::json;
use treekit::{Doc, List, Value};

use crate::helpers::*;

#[test]
fn test_insertion_order_is_preserved() {
    let mut doc = Doc::new();
    doc.insert("z", 1);
    doc.insert("a", 2);
    doc.insert("m", 3);

    // Overwriting keeps the original position
    doc.insert("z", 10);
    assert_eq!(doc.keys(), vec!["z", "a", "m"]);

    // Removal keeps the relative order of the rest
    doc.remove("a");
    assert_json(doc, json!({"z": 10, "m": 3}));
}

#[test]
fn test_handles_alias_storage() {
    let doc = Doc::new();
    let mut alias = doc.clone();
    alias.insert("shared", true);

    assert!(doc.ptr_eq(&alias));
    assert_eq!(doc.get("shared"), Some(Value::Bool(true)));
}

#[test]
fn test_get_path_probes_optional_fields() {
    let doc = doc(json!({"user": {"name": "Alice", "tags": ["a"], "age": 30}}));

    assert_eq!(doc.get_path("user.name"), Some(Value::from("Alice")));
    assert_eq!(doc.get_path("user.missing"), None);
    assert_eq!(doc.get_path("user.name.first"), None);
    // No index syntax: lists are never walked into
    assert_eq!(doc.get_path("user.tags.0"), None);
    assert_eq!(doc.get_path(""), None);
}

#[test]
fn test_set_path_round_trip_from_empty() {
    let mut doc = Doc::new();
    doc.set_path("a.b.c", 1).expect("non-empty path");
    assert_eq!(doc.get_path("a.b.c"), Some(Value::Int(1)));
    assert_json(doc, json!({"a": {"b": {"c": 1}}}));
}

#[test]
fn test_set_path_replaces_non_mapping_intermediates() {
    let mut doc = doc(json!({"a": 5, "b": [1, 2]}));
    doc.set_path("a.x", "over").expect("non-empty path");
    doc.set_path("b.y", true).expect("non-empty path");

    assert_json(doc, json!({"a": {"x": "over"}, "b": {"y": true}}));
}

#[test]
fn test_set_path_returns_previous_value() {
    let mut doc = doc(json!({"a": {"b": 1}}));
    let previous = doc.set_path("a.b", 2).unwrap();
    assert_eq!(previous, Some(Value::Int(1)));
    assert_eq!(doc.set_path("a.c", 3).unwrap(), None);
}

#[test]
fn test_set_path_mutates_aliased_intermediates() {
    let inner = doc(json!({"x": 1}));
    let mut root = Doc::new().with("inner", inner.clone());

    root.set_path("inner.y", 2).unwrap();
    // The caller's handle observes the write
    assert_eq!(inner.get("y"), Some(Value::Int(2)));
}

#[test]
fn test_empty_path_is_rejected_for_writes() {
    let mut doc = doc(json!({"a": 1}));

    let err = doc.set_path("", 1).unwrap_err();
    assert!(err.is_validation_error());
    let err = doc.remove_path("").unwrap_err();
    assert!(err.is_validation_error());

    // Nothing was written
    assert_json(doc, json!({"a": 1}));
}

#[test]
fn test_remove_path() {
    let mut doc = doc(json!({"a": {"b": 1, "c": 2}, "d": 3}));

    assert_eq!(doc.remove_path("a.b").unwrap(), Some(Value::Int(1)));
    assert_eq!(doc.remove_path("d").unwrap(), Some(Value::Int(3)));
    assert_eq!(doc.remove_path("x.y").unwrap(), None);
    assert_json(doc, json!({"a": {"c": 2}}));
}

#[test]
fn test_get_as_converts() {
    let doc = doc(json!({"n": 2.0, "s": "text", "list": [1]}));

    assert_eq!(doc.get_as::<i64>("n"), Some(2));
    assert_eq!(doc.get_as::<f64>("n"), Some(2.0));
    assert_eq!(doc.get_as::<String>("s"), Some("text".to_string()));
    assert_eq!(doc.get_as::<List>("list").map(|l| l.len()), Some(1));
    assert_eq!(doc.get_as::<bool>("s"), None);
}
