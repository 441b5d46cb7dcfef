//! Console commands
//! Grammar, description and dispatch of the typed command vocabulary

pub mod announce;
pub mod definitions;
pub mod executor;
pub mod parser;
pub mod types;

pub use announce::describe;
pub use definitions::{help_text, CommandDescriptor, COMMANDS};
pub use executor::{CommandExecutor, ExecutionContext, ExecutionResult};
pub use parser::{parse_integer, tokenize, CommandParser, Token};
pub use types::{Command, Setting};

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
