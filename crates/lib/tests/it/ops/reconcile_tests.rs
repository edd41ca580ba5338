use serde_json::json;
use treekit::{
    Doc, Value,
    ops::{
        KeySelector, RecordKey, deduplicate, filter_by, find_by, find_in_tree, group_by, index_by,
        merge_by_key, update_where,
    },
};

use crate::helpers::*;

#[test]
fn test_merge_by_key_field_overwrite() {
    let a = records(json!([{"id": 1, "a": 1}]));
    let b = records(json!([{"id": 1, "a": 2, "b": 3}]));
    let out = merge_by_key(&a, &b, "id").unwrap();
    assert_records(&out, json!([{"id": 1, "a": 2, "b": 3}]));
}

#[test]
fn test_merge_by_key_ordering() {
    let a = records(json!([{"id": 3}, {"id": 1}, {"id": 2}]));
    let b = records(json!([{"id": 5, "new": true}, {"id": 1, "seen": true}, {"id": 4}]));
    let out = merge_by_key(&a, &b, "id").unwrap();

    // Left records first in their order, then right-only records in theirs
    assert_records(
        &out,
        json!([{"id": 3}, {"id": 1, "seen": true}, {"id": 2}, {"id": 5, "new": true}, {"id": 4}]),
    );
}

#[test]
fn test_merge_by_key_is_shallow_and_leaves_inputs_alone() {
    let a = records(json!([{"id": 1, "meta": {"x": 1}}]));
    let b = records(json!([{"id": 1, "meta": {"y": 2}}]));
    let out = merge_by_key(&a, &b, "id").unwrap();

    assert_records(&out, json!([{"id": 1, "meta": {"y": 2}}]));
    assert_records(&a, json!([{"id": 1, "meta": {"x": 1}}]));
}

#[test]
fn test_merge_by_key_unmatched_records_are_shared() {
    let a = records(json!([{"id": 1}]));
    let out = merge_by_key(&a, &[], "id").unwrap();
    assert!(out[0].ptr_eq(&a[0]));
}

#[test]
fn test_group_by_bucket_order() {
    let seq = records(json!([{"t": "x", "n": 1}, {"t": "y", "n": 2}, {"t": "x", "n": 3}]));
    let groups = group_by(&seq, "t").unwrap();

    let keys: Vec<_> = groups.keys().cloned().collect();
    assert_eq!(keys, vec![RecordKey::from("x"), RecordKey::from("y")]);
    assert_records(
        groups.get(&RecordKey::from("x")).unwrap(),
        json!([{"t": "x", "n": 1}, {"t": "x", "n": 3}]),
    );
}

#[test]
fn test_group_by_missing_key_bucket() {
    let seq = records(json!([{"t": 1}, {"other": true}, {"t": 1.0}, {"t": null}]));
    let groups = group_by(&seq, "t").unwrap();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups.get(&RecordKey::Int(1)).map(<[Doc]>::len), Some(2));
    assert_eq!(groups.get(&RecordKey::Missing).map(<[Doc]>::len), Some(1));

    assert_json(
        groups.to_doc().unwrap(),
        json!({"1": [{"t": 1}, {"t": 1.0}], "<missing>": [{"other": true}], "null": [{"t": null}]}),
    );
}

#[test]
fn test_deduplicate_first_wins() {
    let seq = records(json!([{"id": 1, "v": "a"}, {"id": 1, "v": "b"}, {"id": 2, "v": "c"}]));
    let out = deduplicate(&seq, "id").unwrap();
    assert_records(&out, json!([{"id": 1, "v": "a"}, {"id": 2, "v": "c"}]));
}

#[test]
fn test_function_and_path_selectors() {
    let seq = records(json!([
        {"user": {"name": "Ann"}, "score": 3},
        {"user": {"name": "Bob"}, "score": 4},
        {"user": {"name": "Ann"}, "score": 5}
    ]));

    let by_name = deduplicate(&seq, KeySelector::path("user.name")).unwrap();
    assert_eq!(by_name.len(), 2);

    let parity = KeySelector::by(|record: &Doc| {
        RecordKey::Bool(record.get_as::<i64>("score").unwrap_or(0) % 2 == 0)
    });
    let groups = group_by(&seq, &parity).unwrap();
    assert_eq!(groups.get(&RecordKey::Bool(false)).map(<[Doc]>::len), Some(2));
}

#[test]
fn test_non_primitive_key_is_a_validation_error() {
    let seq = records(json!([{"id": {"nested": 1}}]));
    for err in [
        merge_by_key(&seq, &[], "id").unwrap_err(),
        group_by(&seq, "id").unwrap_err(),
        deduplicate(&seq, "id").unwrap_err(),
    ] {
        assert!(err.is_validation_error());
    }
}

#[test]
fn test_index_by_last_wins() {
    let seq = records(json!([{"id": "a", "v": 1}, {"id": "b"}, {"id": "a", "v": 2}]));
    let index = index_by(&seq, "id").unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.get_index(0).map(|(k, _)| k), Some(&RecordKey::from("a")));
    assert_eq!(index[&RecordKey::from("a")].get("v"), Some(Value::Int(2)));
}

#[test]
fn test_filter_find_and_update() {
    let seq = records(json!([
        {"id": 1, "kind": "a"},
        {"id": 2, "kind": "b"},
        {"id": 3, "kind": "a"}
    ]));
    let kind_a = Value::from("a");

    assert_eq!(filter_by(&seq, "kind", &kind_a).unwrap().len(), 2);
    assert_eq!(
        find_by(&seq, "id", &Value::Int(2)).unwrap().and_then(|d| d.get("kind")),
        Some(Value::from("b"))
    );
    assert_eq!(find_by(&seq, "id", &Value::Int(9)).unwrap(), None);

    let updated = update_where(&seq, "kind", &kind_a, &doc(json!({"done": true}))).unwrap();
    assert_records(
        &updated,
        json!([
            {"id": 1, "kind": "a", "done": true},
            {"id": 2, "kind": "b"},
            {"id": 3, "kind": "a", "done": true}
        ]),
    );
    // The originals are untouched
    assert_eq!(seq[0].get("done"), None);
}

#[test]
fn test_find_in_tree_depth_first() {
    let menu = records(json!([
        {"path": "/a", "data": [{"path": "/a/x", "title": "first"}]},
        {"path": "/b", "data": [{"path": "/a/x", "title": "second"}, "not a record"]}
    ]));

    let hit = find_in_tree(&menu, "path", &Value::from("/a/x"), "data").unwrap();
    assert_eq!(hit.and_then(|d| d.get("title")), Some(Value::from("first")));

    let miss = find_in_tree(&menu, "path", &Value::from("/zzz"), "data").unwrap();
    assert!(miss.is_none());
}
