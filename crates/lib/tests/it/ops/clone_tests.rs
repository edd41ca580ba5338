use serde_json::json;
use treekit::{Doc, List, Value, deep_clone, equals};

use crate::helpers::*;

#[test]
fn test_clone_is_equal_and_independent() {
    let original = value(json!({"a": {"b": [1, {"c": 2}]}, "d": "x"}));
    let copy = deep_clone(&original).unwrap();
    assert!(equals(&original, &copy).unwrap());

    // Mutate every level of the copy
    let mut root = copy.as_doc().cloned().unwrap();
    root.set_path("a.new", 1).unwrap();
    root.insert("d", "changed");
    let mut list = root.get_path("a.b").and_then(|v| v.as_list().cloned()).unwrap();
    list.push(3);

    assert_json(original, json!({"a": {"b": [1, {"c": 2}]}, "d": "x"}));
}

#[test]
fn test_primitives_clone_to_themselves() {
    for sample in [json!(null), json!(false), json!(-4), json!(0.5), json!("s")] {
        let v = value(sample);
        assert_eq!(deep_clone(&v).unwrap(), v);
    }
}

#[test]
fn test_shared_subtrees_are_not_cycles() {
    let shared = List::from(vec![1, 2]);
    let doc = Doc::new().with("left", shared.clone()).with("right", shared);

    let copy = doc.deep_clone().unwrap();
    assert_json(copy, json!({"left": [1, 2], "right": [1, 2]}));
}

#[test]
fn test_cycles_are_rejected() {
    let err = self_referencing_doc().deep_clone().unwrap_err();
    assert!(err.is_cycle_error());

    let err = Value::Doc(indirectly_cyclic_doc()).deep_clone().unwrap_err();
    assert!(err.is_cycle_error());
    if let treekit::Error::Tree(tree_err) = &err {
        assert_eq!(tree_err.path(), Some("a.b[0]"));
    } else {
        panic!("expected a tree error, got {err:?}");
    }
}
