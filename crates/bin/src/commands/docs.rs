//! Commands over single documents: paths, flattening, merging, equality.

use treekit::{
    Value,
    ops::{EmptyDocs, FlattenOptions, flatten_with, merge_into, unflatten_with},
};

use super::CommandResult;
use crate::{
    cli::{EqualsArgs, FlattenArgs, GetArgs, MergeArgs, SetArgs, UnflattenArgs},
    input::{read_doc, read_value},
};

/// Run the get command
pub fn get(args: &GetArgs) -> CommandResult<Value> {
    let doc = read_doc(&args.file)?;
    doc.get_path(&args.path)
        .ok_or_else(|| format!("no value at '{}'", args.path).into())
}

/// Run the set command
pub fn set(args: &SetArgs) -> CommandResult<Value> {
    let mut doc = read_doc(&args.file)?;
    let value = Value::from_json_str(&args.value)?;
    doc.set_path(&args.path, value)?;
    Ok(Value::Doc(doc))
}

/// Run the flatten command
pub fn flatten(args: &FlattenArgs) -> CommandResult<Value> {
    let doc = read_doc(&args.file)?;
    let empty_docs = if args.keep_empty {
        EmptyDocs::Keep
    } else {
        EmptyDocs::Drop
    };
    let options = FlattenOptions::default()
        .separator(&args.separator)
        .empty_docs(empty_docs);
    Ok(Value::Doc(flatten_with(&doc, &options)?))
}

/// Run the unflatten command
pub fn unflatten(args: &UnflattenArgs) -> CommandResult<Value> {
    let doc = read_doc(&args.file)?;
    let options = FlattenOptions::default().separator(&args.separator);
    Ok(Value::Doc(unflatten_with(&doc, &options)?))
}

/// Run the merge command
pub fn merge(args: &MergeArgs) -> CommandResult<Value> {
    let mut target = read_doc(&args.target)?;
    for source in &args.sources {
        merge_into(&mut target, &read_doc(source)?)?;
    }
    tracing::info!(sources = args.sources.len(), "Merged documents");
    Ok(Value::Doc(target))
}

/// Run the equals command
pub fn equals(args: &EqualsArgs) -> CommandResult<Value> {
    let left = read_value(&args.left)?;
    let right = read_value(&args.right)?;
    Ok(Value::Bool(treekit::equals(&left, &right)?))
}
