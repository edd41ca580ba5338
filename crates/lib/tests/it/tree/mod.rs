//! Tree model integration tests
//!
//! Tests for documents, lists, values, dotted paths and JSON interchange.

mod doc_tests;
mod path_tests;
mod value_tests;
