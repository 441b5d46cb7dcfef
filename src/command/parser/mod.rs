//! Command parser
//! Turns a typed line into a validated command using the declarative definitions

use crate::command::definitions::{CommandDescriptor, COMMANDS};
use crate::command::types::Command;

/// One whitespace-separated word of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word as typed
    pub raw: &'a str,
    /// Lower-cased form used for matching
    pub word: String,
}

/// Split a line into lower-cased words, keeping the typed form alongside
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    line.split_whitespace()
        .map(|raw| Token {
            raw,
            word: raw.to_lowercase(),
        })
        .collect()
}

/// Parse a word made only of decimal digits
///
/// Any other character, an empty word, or a value that does not fit yields `None`.
pub fn parse_integer(word: &str) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    word.chars().try_fold(0usize, |acc, c| {
        let digit = c.to_digit(10)? as usize;
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// Command parser
pub struct CommandParser {
    commands: &'static [CommandDescriptor],
}

impl CommandParser {
    pub fn new() -> Self {
        CommandParser { commands: COMMANDS }
    }

    /// Parse a line; `None` means it is not a command
    pub fn parse(&self, input: &str) -> Option<Command> {
        let tokens = tokenize(input);
        let (verb, args) = tokens.split_first()?;

        // A verb may appear in several descriptors (`set`); the first whose shape fits wins.
        self.commands
            .iter()
            .filter(|desc| desc.matches(&verb.word))
            .find_map(|desc| (desc.factory)(args))
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
