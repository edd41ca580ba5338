use serde_json::json;
use treekit::{Doc, List, Value};

use crate::helpers::*;

#[test]
fn test_numbers_compare_across_kinds() {
    assert_eq!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Int(1), Value::Float(1.5));
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_eq!(Value::Float(-0.0), Value::Int(0));
}

#[test]
fn test_empty_values() {
    assert!(Value::Null.is_empty_value());
    assert!(Value::Doc(Doc::new()).is_empty_value());
    assert!(Value::List(List::new()).is_empty_value());
    assert!(!value(json!({"a": null})).is_empty_value());
    assert!(!Value::Text(String::new()).is_empty_value());
    assert!(!Value::Int(0).is_empty_value());
}

#[test]
fn test_type_names() {
    assert_eq!(value(json!(null)).type_name(), "null");
    assert_eq!(value(json!([1])).type_name(), "list");
    assert_eq!(value(json!({})).type_name(), "doc");
}

#[test]
fn test_debug_of_cyclic_value_terminates() {
    let doc = self_referencing_doc();
    let rendered = format!("{doc:?}");
    assert!(rendered.contains("<cycle>"), "got {rendered}");

    let rendered = format!("{}", Value::Doc(doc));
    assert!(rendered.contains("<cycle>"), "got {rendered}");
}

#[test]
fn test_partial_eq_on_cyclic_values_is_false() {
    let doc = self_referencing_doc();
    // `==` cannot report the cycle, so it answers false rather than looping
    assert_ne!(doc, doc.clone());
}
