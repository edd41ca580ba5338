//! Subcommand implementations.
//!
//! Every command reads its inputs, runs one library operation and returns
//! the result as a tree value; printing is left to the caller.

mod docs;
mod records;

use treekit::Value;

use crate::cli::Commands;

/// Result type of a command.
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Run the selected command
pub fn run(command: &Commands) -> CommandResult<Value> {
    match command {
        Commands::Get(args) => docs::get(args),
        Commands::Set(args) => docs::set(args),
        Commands::Flatten(args) => docs::flatten(args),
        Commands::Unflatten(args) => docs::unflatten(args),
        Commands::Merge(args) => docs::merge(args),
        Commands::Equals(args) => docs::equals(args),
        Commands::GroupBy(args) => records::group_by(args),
        Commands::Dedupe(args) => records::dedupe(args),
        Commands::MergeByKey(args) => records::merge_by_key(args),
    }
}
