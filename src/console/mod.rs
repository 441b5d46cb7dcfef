//! Interactive console
//! Prompt, read a line, parse it, then announce and dispatch, until quit or end of input

use std::io::{self, BufRead, Write};

use crate::anu::QrnSource;
use crate::command::{
    describe, Command, CommandExecutor, CommandParser, ExecutionContext, ExecutionResult,
};
use crate::error::report;
use crate::store::Store;

pub const PROMPT: &str = "QRN> ";
pub const SYNTAX_ERROR: &str = "Error: could not parse that command.";
pub const SYNTAX_HINT: &str = "Type \"help\" or \"?\" for a list of commands.";

/// The read-parse-dispatch loop and everything it owns
pub struct Console<S, R, W> {
    store: Store,
    source: S,
    input: R,
    out: W,
    parser: CommandParser,
}

impl<S: QrnSource, R: BufRead, W: Write> Console<S, R, W> {
    pub fn new(store: Store, source: S, input: R, out: W) -> Self {
        Console {
            store,
            source,
            input,
            out,
            parser: CommandParser::new(),
        }
    }

    /// Run until `quit` or end of input
    ///
    /// Only failures of the console's own input or output end the loop with
    /// an error; command failures are reported and the loop carries on.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("end of input");
                writeln!(self.out)?;
                return Ok(());
            }

            if self.step(&line)? == ExecutionResult::Quit {
                return Ok(());
            }
        }
    }

    /// Handle a single line of input
    pub fn step(&mut self, line: &str) -> io::Result<ExecutionResult> {
        let Some(command) = self.parser.parse(line) else {
            writeln!(self.out, "{SYNTAX_ERROR}")?;
            writeln!(self.out, "{SYNTAX_HINT}")?;
            return Ok(ExecutionResult::Continue);
        };
        if command == Command::Quit {
            return Ok(ExecutionResult::Quit);
        }

        if let Some(description) = describe(&command) {
            writeln!(self.out, "{description}")?;
        }
        log::debug!("dispatching {command:?}");

        let result = {
            let mut ctx = ExecutionContext {
                store: &mut self.store,
                source: &self.source,
                input: &mut self.input,
                out: &mut self.out,
            };
            CommandExecutor::execute(command, &mut ctx)
        };
        Ok(report(result, &mut self.out).unwrap_or(ExecutionResult::Continue))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Give back the output sink, consuming the console
    pub fn into_output(self) -> W {
        self.out
    }
}
