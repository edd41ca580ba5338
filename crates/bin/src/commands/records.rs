//! Commands over arrays of records.

use treekit::{
    Value,
    ops::{KeySelector, deduplicate, group_by as group_records, merge_by_key as merge_records},
};

use super::CommandResult;
use crate::{
    cli::{KeyArgs, KeyedArgs, MergeByKeyArgs},
    input::read_records,
};

fn selector(args: &KeyArgs) -> KeySelector {
    if args.nested {
        KeySelector::path(&args.key)
    } else {
        KeySelector::field(&args.key)
    }
}

/// Run the group-by command
pub fn group_by(args: &KeyedArgs) -> CommandResult<Value> {
    let records = read_records(&args.file)?;
    let groups = group_records(&records, selector(&args.key))?;
    Ok(Value::Doc(groups.to_doc()?))
}

/// Run the dedupe command
pub fn dedupe(args: &KeyedArgs) -> CommandResult<Value> {
    let records = read_records(&args.file)?;
    Ok(Value::from(deduplicate(&records, selector(&args.key))?))
}

/// Run the merge-by-key command
pub fn merge_by_key(args: &MergeByKeyArgs) -> CommandResult<Value> {
    let left = read_records(&args.left)?;
    let right = read_records(&args.right)?;
    Ok(Value::from(merge_records(&left, &right, selector(&args.key))?))
}
