//! CLI argument definitions for the Treekit binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Treekit: recursive operations on JSON documents
#[derive(Parser, Debug)]
#[command(name = "treekit")]
#[command(about = "Treekit: query, merge, flatten and reconcile JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format for the result
    #[arg(long, global = true, value_enum, default_value = "pretty", env = "TREEKIT_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a dotted path
    Get(GetArgs),
    /// Write a JSON value at a dotted path and print the document
    Set(SetArgs),
    /// Collapse nested objects into dotted keys
    Flatten(FlattenArgs),
    /// Expand dotted keys into nested objects
    Unflatten(UnflattenArgs),
    /// Deep-merge one or more sources into a target, left to right
    Merge(MergeArgs),
    /// Compare two documents structurally and print true or false
    Equals(EqualsArgs),
    /// Partition an array of records into buckets by key
    GroupBy(KeyedArgs),
    /// Keep the first record for each key
    Dedupe(KeyedArgs),
    /// Combine two arrays of records by key
    MergeByKey(MergeByKeyArgs),
}

/// A JSON file to read; `-` reads standard input
pub type Input = PathBuf;

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// JSON object to read
    pub file: Input,
    /// Dotted path, such as `user.address.city`
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// JSON object to update
    pub file: Input,
    /// Dotted path to write
    pub path: String,
    /// Value to store, as JSON text (`'"text"'`, `3`, `'{"a": 1}'`)
    pub value: String,
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// JSON object to flatten
    pub file: Input,

    /// Emit empty nested objects instead of dropping them
    #[arg(long)]
    pub keep_empty: bool,

    /// Separator placed between joined keys
    #[arg(short, long, default_value = ".", env = "TREEKIT_SEPARATOR")]
    pub separator: String,
}

/// Arguments for the unflatten command
#[derive(clap::Args, Debug)]
pub struct UnflattenArgs {
    /// Flat JSON object to expand
    pub file: Input,

    /// Separator that splits keys
    #[arg(short, long, default_value = ".", env = "TREEKIT_SEPARATOR")]
    pub separator: String,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// JSON object to merge into
    pub target: Input,
    /// JSON objects merged in order; later sources win
    #[arg(required = true)]
    pub sources: Vec<Input>,
}

/// Arguments for the equals command
#[derive(clap::Args, Debug)]
pub struct EqualsArgs {
    pub left: Input,
    pub right: Input,
}

/// How records are keyed
#[derive(clap::Args, Debug)]
pub struct KeyArgs {
    /// Field holding the record key
    #[arg(short, long)]
    pub key: String,

    /// Treat the key as a dotted path into nested objects
    #[arg(long)]
    pub nested: bool,
}

/// Arguments for commands over one array of records
#[derive(clap::Args, Debug)]
pub struct KeyedArgs {
    /// JSON array of objects
    pub file: Input,

    #[command(flatten)]
    pub key: KeyArgs,
}

/// Arguments for the merge-by-key command
#[derive(clap::Args, Debug)]
pub struct MergeByKeyArgs {
    /// JSON array of objects that keeps its order
    pub left: Input,
    /// JSON array of objects merged into the left one
    pub right: Input,

    #[command(flatten)]
    pub key: KeyArgs,
}
