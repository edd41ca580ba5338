//! Reading JSON inputs from files or standard input.

use std::{io::Read, path::Path};

use treekit::{Doc, Value};

use crate::commands::CommandResult;

/// Reads and parses one JSON input. `-` reads standard input.
pub fn read_value(input: &Path) -> CommandResult<Value> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| format!("cannot read {}: {e}", input.display()))?
    };
    tracing::debug!(input = %input.display(), bytes = text.len(), "Read input");
    Ok(Value::from_json_str(&text)?)
}

/// Reads an input that must hold a JSON object.
pub fn read_doc(input: &Path) -> CommandResult<Doc> {
    match read_value(input)? {
        Value::Doc(doc) => Ok(doc),
        other => Err(not_a(input, "an object", &other)),
    }
}

/// Reads an input that must hold a JSON array of objects.
pub fn read_records(input: &Path) -> CommandResult<Vec<Doc>> {
    let value = read_value(input)?;
    let Some(list) = value.as_list() else {
        return Err(not_a(input, "an array of objects", &value));
    };

    list.to_vec()
        .into_iter()
        .enumerate()
        .map(|(index, item)| -> CommandResult<Doc> {
            match item {
                Value::Doc(doc) => Ok(doc),
                other => Err(format!(
                    "{}: element {index} is {}, expected an object",
                    input.display(),
                    other.type_name()
                )
                .into()),
            }
        })
        .collect()
}

fn not_a(input: &Path, expected: &str, found: &Value) -> Box<dyn std::error::Error> {
    format!(
        "{}: expected {expected}, found {}",
        input.display(),
        found.type_name()
    )
    .into()
}
