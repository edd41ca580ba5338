use serde_json::json;
use treekit::{Path, PathBuf, Value, path};

use crate::helpers::*;

#[test]
fn test_empty_segments_are_keys() {
    assert_eq!(PathBuf::from("a..b.").as_str(), "a..b.");
    assert_eq!(Path::new("a..b").components().collect::<Vec<_>>(), vec!["a", "", "b"]);
    assert_eq!(Path::new("...").len(), 4);
    assert!(Path::new("").is_empty());

    let mut doc = doc(json!({}));
    doc.set_path("a..b", 1).unwrap();
    assert_json(doc.clone(), json!({"a": {"": {"b": 1}}}));
    assert_eq!(doc.get_path("a..b"), Some(Value::Int(1)));
    assert_eq!(doc.get_path("a.b"), None);

    doc.set_path("a.", 2).unwrap();
    assert_eq!(doc.get_path("a."), Some(Value::Int(2)));
    assert_eq!(doc.remove_path("a.").unwrap(), Some(Value::Int(2)));
}

#[test]
fn test_numeric_components_are_keys() {
    let mut doc = doc(json!({}));
    doc.set_path("items.0", "first").unwrap();
    assert_json(doc, json!({"items": {"0": "first"}}));
}

#[test]
fn test_path_macro_with_doc_access() {
    let doc = doc(json!({"users": {"7": {"name": "Ann"}}}));
    let id = 7;

    assert_eq!(doc.get_path(path!("users", id, "name")), Some(Value::from("Ann")));
    assert_eq!(doc.get_path(path!("users.7.name")), Some(Value::from("Ann")));
    assert!(path!().is_empty());
}

#[test]
fn test_parent_and_join() {
    let path = PathBuf::from("a.b.c");
    assert_eq!(path.parent(), Some(PathBuf::from("a.b")));
    assert_eq!(PathBuf::from("a").parent(), None);
    assert_eq!(path.join("d").as_str(), "a.b.c.d");
    assert_eq!(path!("a.b.c").last(), Some("c"));
}
