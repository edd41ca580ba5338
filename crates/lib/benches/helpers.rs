//! Shared helpers for benchmark tests

use treekit::{Doc, List, Value};

/// Builds a balanced tree of nested documents.
///
/// Every document has `width` children; the documents at `depth` 0 hold
/// scalar leaves and a short list instead of further documents.
pub fn build_tree(depth: usize, width: usize) -> Doc {
    let mut doc = Doc::new();
    for i in 0..width {
        if depth == 0 {
            doc.insert(format!("leaf_{i}"), i as i64);
        } else {
            doc.insert(format!("node_{i}"), build_tree(depth - 1, width));
        }
    }
    if depth == 0 {
        doc.insert("items", List::from(vec![1, 2, 3]));
    }
    doc
}

/// Builds `count` records whose `id` field repeats every `distinct` records.
pub fn build_records(count: usize, distinct: usize) -> Vec<Doc> {
    (0..count)
        .map(|i| {
            Doc::new()
                .with("id", (i % distinct.max(1)) as i64)
                .with("name", format!("record_{i}"))
                .with("payload", Doc::new().with("n", i as i64))
        })
        .collect()
}

/// Wraps a document as a value.
pub fn as_value(doc: &Doc) -> Value {
    Value::Doc(doc.clone())
}
