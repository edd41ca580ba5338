use serde_json::json;
use treekit::{
    Doc, Merge, Value,
    ops::{merge_into, merged, shallow_merge},
};

use crate::helpers::*;

#[test]
fn test_disjoint_keys_are_combined() {
    let mut target = doc(json!({"a": 1}));
    merge_into(&mut target, &doc(json!({"b": 2}))).unwrap();
    assert_json(target, json!({"a": 1, "b": 2}));
}

#[test]
fn test_nested_documents_are_combined() {
    let mut target = doc(json!({"a": {"x": 1}}));
    merge_into(&mut target, &doc(json!({"a": {"y": 2}}))).unwrap();
    assert_json(target, json!({"a": {"x": 1, "y": 2}}));
}

#[test]
fn test_type_mismatch_overwrites_both_ways() {
    let mut target = doc(json!({"a": 1, "b": {"x": 1}}));
    merge_into(&mut target, &doc(json!({"a": {"x": 1}, "b": 7}))).unwrap();
    assert_json(target, json!({"a": {"x": 1}, "b": 7}));
}

#[test]
fn test_lists_are_replaced_not_concatenated() {
    let mut target = doc(json!({"tags": ["a", "b"], "keep": true}));
    merge_into(&mut target, &doc(json!({"tags": ["c"]}))).unwrap();
    assert_json(target, json!({"tags": ["c"], "keep": true}));
}

#[test]
fn test_nested_merge_is_in_place() {
    let inner = doc(json!({"x": 1}));
    let mut target = Doc::new().with("inner", inner.clone());
    merge_into(&mut target, &doc(json!({"inner": {"y": 2}}))).unwrap();

    // The existing nested document was updated, not replaced
    assert_eq!(inner.get("y"), Some(Value::Int(2)));
}

#[test]
fn test_merged_leaves_target_untouched() {
    let target = doc(json!({"a": {"x": 1}}));
    let result = merged(&target, &doc(json!({"a": {"y": 2}}))).unwrap();

    assert_json(target, json!({"a": {"x": 1}}));
    assert_json(result, json!({"a": {"x": 1, "y": 2}}));
}

#[test]
fn test_merge_trait_on_values() {
    let mut target = value(json!({"a": {"x": 1}}));
    target.merge_into(&value(json!({"a": {"z": 3}}))).unwrap();
    assert_json(target.clone(), json!({"a": {"x": 1, "z": 3}}));

    let replaced = target.merged(&value(json!([1]))).unwrap();
    assert_json(replaced, json!([1]));
}

#[test]
fn test_shallow_merge_does_not_recurse() {
    let a = doc(json!({"id": 1, "meta": {"x": 1}}));
    let b = doc(json!({"meta": {"y": 2}, "extra": true}));
    assert_json(
        shallow_merge(&a, &b),
        json!({"id": 1, "meta": {"y": 2}, "extra": true}),
    );
}

#[test]
fn test_cycles_fail_before_mutation() {
    let mut target = doc(json!({"untouched": 1}));
    let err = merge_into(&mut target, &self_referencing_doc()).unwrap_err();
    assert!(err.is_cycle_error());
    assert_json(target, json!({"untouched": 1}));

    let mut cyclic_target = indirectly_cyclic_doc();
    let err = merge_into(&mut cyclic_target, &doc(json!({"a": {"c": 1}}))).unwrap_err();
    assert!(err.is_cycle_error());
    assert_eq!(cyclic_target.get_path("a.c"), None);
}
