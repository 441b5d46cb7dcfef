//! Command definitions
//! Declarative table of every console command

use crate::command::parser::{parse_integer, Token};
use crate::command::types::{Command, Setting};
use crate::display::DisplayStyle;

/// Function pointer type for command factories
/// Takes the tokens after the verb, returns the command or `None` on a shape mismatch
pub type CommandFactory = fn(&[Token<'_>]) -> Option<Command>;

/// Descriptor for a command
#[derive(Clone, Copy)]
pub struct CommandDescriptor {
    /// Canonical verb
    pub name: &'static str,
    /// Alternative verbs
    pub aliases: &'static [&'static str],
    /// Usage line for help text
    pub usage: &'static str,
    /// Description for help text
    pub description: &'static str,
    pub factory: CommandFactory,
}

impl CommandDescriptor {
    pub fn matches(&self, verb: &str) -> bool {
        self.name == verb || self.aliases.contains(&verb)
    }
}

// Argument shapes

/// `N [spins|binary]`
fn count_and_style(args: &[Token<'_>]) -> Option<(usize, DisplayStyle)> {
    match args {
        [n] => Some((parse_integer(&n.word)?, DisplayStyle::Default)),
        [n, style] => Some((parse_integer(&n.word)?, DisplayStyle::from_word(&style.word)?)),
        _ => None,
    }
}

/// `[spins|binary]`
fn style_only(args: &[Token<'_>]) -> Option<DisplayStyle> {
    match args {
        [] => Some(DisplayStyle::Default),
        [style] => DisplayStyle::from_word(&style.word),
        _ => None,
    }
}

fn single_count(args: &[Token<'_>]) -> Option<usize> {
    match args {
        [n] => parse_integer(&n.word),
        _ => None,
    }
}

fn no_args(args: &[Token<'_>], command: Command) -> Option<Command> {
    args.is_empty().then_some(command)
}

// Factory functions

fn parse_add(args: &[Token<'_>]) -> Option<Command> {
    single_count(args).map(Command::Add)
}

fn parse_live(args: &[Token<'_>]) -> Option<Command> {
    let (n, style) = count_and_style(args)?;
    Some(Command::Live(style, n))
}

fn parse_observe(args: &[Token<'_>]) -> Option<Command> {
    let (n, style) = count_and_style(args)?;
    Some(Command::Observe(style, n))
}

fn parse_peek(args: &[Token<'_>]) -> Option<Command> {
    match args.split_first() {
        Some((first, rest)) if first.word == "all" => style_only(rest).map(Command::PeekAll),
        _ => {
            let (n, style) = count_and_style(args)?;
            Some(Command::Peek(style, n))
        }
    }
}

fn parse_peek_all(args: &[Token<'_>]) -> Option<Command> {
    style_only(args).map(Command::PeekAll)
}

fn parse_fill(args: &[Token<'_>]) -> Option<Command> {
    no_args(args, Command::Fill)
}

fn parse_restore(args: &[Token<'_>]) -> Option<Command> {
    no_args(args, Command::RestoreDefaults)
}

fn parse_reinitialize(args: &[Token<'_>]) -> Option<Command> {
    no_args(args, Command::Reinitialize)
}

fn parse_status(args: &[Token<'_>]) -> Option<Command> {
    no_args(args, Command::Status)
}

/// The path keeps the case it was typed with
fn parse_save(args: &[Token<'_>]) -> Option<Command> {
    match args {
        [path] => Some(Command::Save(path.raw.to_string())),
        _ => None,
    }
}

fn parse_set(args: &[Token<'_>]) -> Option<Command> {
    match args {
        [setting, n] => Some(Command::Set(
            Setting::from_word(&setting.word)?,
            parse_integer(&n.word)?,
        )),
        _ => None,
    }
}

fn parse_help(args: &[Token<'_>]) -> Option<Command> {
    no_args(args, Command::Help)
}

fn parse_quit(args: &[Token<'_>]) -> Option<Command> {
    no_args(args, Command::Quit)
}

/// Every command the console understands, in help order
pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "add",
        aliases: &[],
        usage: "add [# bytes]",
        description: "Fetch the given number of bytes and add them to the store",
        factory: parse_add,
    },
    CommandDescriptor {
        name: "live",
        aliases: &[],
        usage: "live [# bytes]",
        description: "Fetch the given number of bytes and display them directly",
        factory: parse_live,
    },
    CommandDescriptor {
        name: "observe",
        aliases: &[],
        usage: "observe [# bytes]",
        description: "Take and display bytes from the store, fetching more if needed",
        factory: parse_observe,
    },
    CommandDescriptor {
        name: "peek",
        aliases: &[],
        usage: "peek [# bytes]",
        description: "Display up to the given number of bytes without removing them",
        factory: parse_peek,
    },
    CommandDescriptor {
        name: "peekall",
        aliases: &[],
        usage: "peekall | peek all",
        description: "Display every byte in the store without removing them",
        factory: parse_peek_all,
    },
    CommandDescriptor {
        name: "fill",
        aliases: &[],
        usage: "fill",
        description: "Fill the store up to the target size",
        factory: parse_fill,
    },
    CommandDescriptor {
        name: "restore",
        aliases: &[],
        usage: "restore",
        description: "Restore the default settings",
        factory: parse_restore,
    },
    CommandDescriptor {
        name: "reinitialize",
        aliases: &[],
        usage: "reinitialize",
        description: "Restore the default settings and refill the store from scratch",
        factory: parse_reinitialize,
    },
    CommandDescriptor {
        name: "status",
        aliases: &[],
        usage: "status",
        description: "Show the store size and settings",
        factory: parse_status,
    },
    CommandDescriptor {
        name: "save",
        aliases: &[],
        usage: "save [path]",
        description: "Write the store as a binary file to the given path",
        factory: parse_save,
    },
    CommandDescriptor {
        name: "set",
        aliases: &[],
        usage: "set minStoreSize [# bytes]",
        description: "Set the size below which the store is refilled",
        factory: parse_set,
    },
    CommandDescriptor {
        name: "set",
        aliases: &[],
        usage: "set targetStoreSize [# bytes]",
        description: "Set the size the store is refilled to",
        factory: parse_set,
    },
    CommandDescriptor {
        name: "help",
        aliases: &["?"],
        usage: "help | ?",
        description: "Show this text",
        factory: parse_help,
    },
    CommandDescriptor {
        name: "quit",
        aliases: &["q"],
        usage: "quit | q",
        description: "Leave the console",
        factory: parse_quit,
    },
];

const STYLE_NOTE: &str = "The observe, peek, peekall and live commands may end with \"spins\" or \"binary\"\nto display the bytes as spins or as binary digits.";

/// The command reference printed by `help`
pub fn help_text() -> String {
    let mut text = String::from("Commands:\n");
    for desc in COMMANDS {
        text.push_str(&format!("  {:<32}{}\n", desc.usage, desc.description));
    }
    text.push('\n');
    text.push_str(STYLE_NOTE);
    text.push('\n');
    text
}
