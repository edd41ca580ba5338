use serde_json::json;
use treekit::{
    equals, flatten, unflatten,
    ops::{EmptyDocs, FlattenOptions, flatten_with},
};

use crate::helpers::*;

#[test]
fn test_key_construction() {
    let flat = flatten(&doc(json!({"a": {"b": 1, "c": {"d": 2}}}))).unwrap();
    assert_json(flat, json!({"a.b": 1, "a.c.d": 2}));
}

#[test]
fn test_lists_are_leaves() {
    let flat = flatten(&doc(json!({"a": {"items": [{"x": 1}, 2]}}))).unwrap();
    assert_json(flat, json!({"a.items": [{"x": 1}, 2]}));
}

#[test]
fn test_empty_nested_documents_vanish_by_default() {
    let source = doc(json!({"a": {}, "b": {"c": {}}, "d": 1}));
    assert_json(flatten(&source).unwrap(), json!({"d": 1}));

    let options = FlattenOptions::default().empty_docs(EmptyDocs::Keep);
    assert_json(
        flatten_with(&source, &options).unwrap(),
        json!({"a": {}, "b.c": {}, "d": 1}),
    );
}

#[test]
fn test_round_trip_without_empties_or_lists() {
    let original = doc(json!({"a": {"b": 1, "c": {"d": "x", "e": null}}, "f": true}));
    let rebuilt = unflatten(&flatten(&original).unwrap()).unwrap();
    assert!(equals(&original.into(), &rebuilt.into()).unwrap());
}

#[test]
fn test_round_trip_keeps_empty_keys_apart() {
    let original = doc(json!({"a": {"": {"b": 1}, "b": 2}}));
    let flat = flatten(&original).unwrap();
    assert_json(flat.clone(), json!({"a..b": 1, "a.b": 2}));

    let rebuilt = unflatten(&flat).unwrap();
    assert_json(rebuilt.clone(), json!({"a": {"": {"b": 1}, "b": 2}}));
    assert!(equals(&original.into(), &rebuilt.into()).unwrap());
}

#[test]
fn test_flatten_rejects_cycles() {
    assert!(flatten(&self_referencing_doc()).unwrap_err().is_cycle_error());
    // The cycle here passes through a list
    assert!(flatten(&indirectly_cyclic_doc()).unwrap_err().is_cycle_error());
}
